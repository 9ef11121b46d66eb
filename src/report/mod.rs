use std::fmt;
use chrono::NaiveDateTime;
use comfy_table::{presets, Cell, CellAlignment, Table};
use log::{debug, info};
use crate::aggregate::ChargeCounter;
use crate::config::Config;
use crate::csv_reader::{CsvError, TransactionReader};
use crate::transaction::Record;
use crate::util::{parse_transaction_date, TrailingWindow};

pub(crate) static REPORT_TITLE: &str = "LAST 12 MONTHS";
pub(crate) static REPORT_HEADER: [&str; 4] = ["Description", "Amount", "Frequency", "Total Spent"];

/// One recurring charge in the report
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReportRow {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) frequency: usize,
    pub(crate) total_spent: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Report {
    pub(crate) rows: Vec<ReportRow>,
}

/// Read the configured export and rank charges seen within the trailing window ending at `now`.
pub(crate) fn build_report(config: &Config, now: NaiveDateTime) -> Result<Report, CsvError> {
    let reader = TransactionReader::open(&config.csv_path)?;
    let window = TrailingWindow::ending_at(now, config.window_days);
    let counter = count_recent_charges(reader, &window)?;
    Report::from_counter(&counter, config.limit)
}

/// Count (description, amount) pairs of records inside the window.
/// Stops at the first unreadable row or unparseable date.
pub(crate) fn count_recent_charges<I>(records: I, window: &TrailingWindow) -> Result<ChargeCounter, CsvError>
where I: IntoIterator<Item = Result<Record, CsvError>> {
    let mut counter = ChargeCounter::new();
    let mut total = 0usize;
    let mut excluded = 0usize;

    for record in records {
        let record = record?;
        total += 1;
        let date = parse_transaction_date(&record.transaction_date)?;
        if window.contains(date) {
            counter.add(record.into());
        } else {
            debug!("Outside window: {record}");
            excluded += 1;
        }
    }

    debug!("{excluded} transactions fall outside the window");
    info!("Read {total} transactions, {} distinct charges in window", counter.len());
    Ok(counter)
}

impl Report {
    pub(crate) fn from_counter(counter: &ChargeCounter, limit: usize) -> Result<Report, CsvError> {
        let rows = counter.most_common(limit)
            .into_iter()
            .map(|(key, count)| {
                let total = parse_amount(&key.amount)? * count as f64;
                Ok(ReportRow {
                    description: key.description.clone(),
                    amount: format!("${}", key.amount),
                    frequency: count,
                    total_spent: format_amount(total),
                })
            })
            .collect::<Result<Vec<ReportRow>, CsvError>>()?;

        Ok(Report { rows })
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::ASCII_FULL);
        table.set_header(REPORT_HEADER.to_vec());
        for r in &self.rows {
            table.add_row(vec![
                Cell::new(r.description.as_str()),
                Cell::new(r.amount.as_str()).set_alignment(CellAlignment::Right),
                Cell::new(r.frequency).set_alignment(CellAlignment::Right),
                Cell::new(r.total_spent.as_str()).set_alignment(CellAlignment::Right),
            ]);
        }
        table
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        write!(f, "{}", self.table())
    }
}

fn parse_amount(s: &str) -> Result<f64, CsvError> {
    s.trim().parse::<f64>().map_err(|_| CsvError::InvalidAmountError(s.to_string()))
}

/// Format $ amount
fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}
