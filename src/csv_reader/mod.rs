use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use csv::StringRecord;
use log::info;
use crate::transaction::Record;
use crate::csv_reader::column::{parse_csv_column_with_header, ColumnInfo, AMOUNT, DESCRIPTION, TRANSACTION_DATE};

pub(crate) mod column;

#[cfg(test)]
pub(crate) mod tests;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    FileNotFoundError(String),
    ReadError(String),
    MissingFieldsError(Vec<String>),
    InvalidRowError(String),
    InvalidDateError(String),
    InvalidAmountError(String),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CsvError::FileNotFoundError(s) => write!(f, "csv reading error: file not found: {s}"),
            CsvError::ReadError(s) => write!(f, "csv reading error: {s}"),
            CsvError::MissingFieldsError(fields) => write!(f, "csv reading error: missing required fields: {}", fields.join(", ")),
            CsvError::InvalidRowError(s) => write!(f, "csv reading error: {s}"),
            CsvError::InvalidDateError(s) => write!(f, "unable to parse date '{s}', expected month/day/2-digit-year"),
            CsvError::InvalidAmountError(s) => write!(f, "unable to parse amount '{s}'"),
        }
    }
}

impl std::error::Error for CsvError {}

impl From<csv::Error> for CsvError {
    fn from(e: csv::Error) -> Self {
        CsvError::ReadError(e.to_string())
    }
}

/// Reads an activity export row by row.
///
/// The header is validated when the reader is opened, so no row is produced from a file lacking
/// any required column. Rows are read lazily and only once; the file is closed when the reader
/// is dropped.
pub(crate) struct TransactionReader {
    reader: csv::Reader<File>,
    columns: ColumnInfo,
    row: StringRecord,
}

impl TransactionReader {
    pub(crate) fn open(file_path: &Path) -> Result<TransactionReader, CsvError> {
        info!("Scanning CSV headers from {:?}", file_path);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)
            .map_err(|e| {
                if matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == io::ErrorKind::NotFound) {
                    CsvError::FileNotFoundError(file_path.display().to_string())
                } else {
                    e.into()
                }
            })?;
        let columns = parse_csv_column_with_header(reader.headers()?)?;

        Ok(TransactionReader {
            reader,
            columns,
            row: StringRecord::new(),
        })
    }

    /// Only date, description and amount are needed from a row. Other columns may be cut short,
    /// e.g. a trailing empty memo, and read as empty.
    fn to_record(&self) -> Result<Record, CsvError> {
        let columns = &self.columns;
        let row = &self.row;
        let optional = |column: usize| row.get(column).unwrap_or_default().to_string();
        Ok(Record {
            transaction_date: columns.field(row, columns.transaction_date_column, TRANSACTION_DATE)?.to_string(),
            post_date: optional(columns.post_date_column),
            description: columns.field(row, columns.description_column, DESCRIPTION)?.to_string(),
            category: optional(columns.category_column),
            transaction_type: optional(columns.type_column),
            amount: columns.field(row, columns.amount_column, AMOUNT)?.to_string(),
            memo: optional(columns.memo_column),
        })
    }
}

impl Iterator for TransactionReader {
    type Item = Result<Record, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(self.to_record()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
