use chrono::{Duration, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use crate::csv_reader::CsvError;

/// Two digit years below this land in 20xx, the rest in 19xx. E.g. 68 is 2068, 69 is 1969.
pub(crate) const CENTURY_PIVOT: i32 = 69;

lazy_static! {
    static ref MMDDYY: Regex = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$").unwrap();
}

/// Parse dates like '8/2/23' or '12/25/23' into midnight of that day.
pub(crate) fn parse_transaction_date(s: &str) -> Result<NaiveDateTime, CsvError> {
    let invalid = || CsvError::InvalidDateError(s.to_string());

    let captures = MMDDYY.captures(s).ok_or_else(invalid)?;
    let month: u32 = captures[1].parse().map_err(|_| invalid())?;
    let day: u32 = captures[2].parse().map_err(|_| invalid())?;
    let yy: i32 = captures[3].parse().map_err(|_| invalid())?;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(invalid)
}

/// A lookback period of whole days ending at a fixed instant.
/// The cutoff is fixed-width, leap days are not accounted for.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrailingWindow {
    cutoff: NaiveDateTime,
}

impl TrailingWindow {
    pub(crate) fn ending_at(now: NaiveDateTime, days: u32) -> TrailingWindow {
        let cutoff = now - Duration::days(days as i64);
        debug!("Trailing window of {days} days starts at {cutoff}");
        TrailingWindow { cutoff }
    }

    /// Inclusive of the cutoff instant
    pub(crate) fn contains(&self, date: NaiveDateTime) -> bool {
        date >= self.cutoff
    }
}
