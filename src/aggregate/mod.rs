use std::collections::HashMap;
use crate::transaction::ChargeKey;

/// Occurrence counter that remembers the order in which keys were first seen.
/// Counts live in a vec, the map only points a key to its slot.
#[derive(Debug, Default)]
pub(crate) struct ChargeCounter {
    slots: HashMap<ChargeKey, usize>,
    counts: Vec<(ChargeKey, usize)>,
}

impl ChargeCounter {
    pub(crate) fn new() -> ChargeCounter {
        ChargeCounter::default()
    }

    pub(crate) fn add(&mut self, key: ChargeKey) {
        match self.slots.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// Number of distinct keys
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }

    /// Up to `n` entries ordered by count, highest first. Equal counts keep first-seen order.
    pub(crate) fn most_common(&self, n: usize) -> Vec<(&ChargeKey, usize)> {
        let mut entries: Vec<(&ChargeKey, usize)> = self.counts.iter().map(|(k, c)| (k, *c)).collect();
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl FromIterator<ChargeKey> for ChargeCounter {
    fn from_iter<I: IntoIterator<Item = ChargeKey>>(iter: I) -> Self {
        let mut counter = ChargeCounter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
