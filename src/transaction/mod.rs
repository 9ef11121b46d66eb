use std::fmt;

/// A single row of a credit card activity export.
/// All values are kept as they appear in the file, dates are parsed only when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub(crate) transaction_date: String,
    pub(crate) post_date: String,
    pub(crate) description: String,
    pub(crate) category: String,
    pub(crate) transaction_type: String,
    /// Amount text as stored in the source, sign convention untouched
    pub(crate) amount: String,
    pub(crate) memo: String,
}

/// Identifies a recurring charge: same description and same amount text.
/// "10.00" and "10.0" are different charges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ChargeKey {
    pub(crate) description: String,
    pub(crate) amount: String,
}

impl From<Record> for ChargeKey {
    fn from(item: Record) -> Self {
        ChargeKey {
            description: item.description,
            amount: item.amount,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (posted {}) {} [{}/{}] {}", self.transaction_date, self.post_date, self.description,
               self.category, self.transaction_type, self.amount)?;
        if !self.memo.is_empty() {
            write!(f, " memo: {}", self.memo)?;
        }
        Ok(())
    }
}
