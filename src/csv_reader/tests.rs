use std::path::PathBuf;
use crate::csv_reader::{CsvError, TransactionReader};
use crate::transaction::Record;

#[test]
fn test_read_transactions() {
    let reader = TransactionReader::open(&fixture_filename("activity.csv")).unwrap();
    let rows: Vec<Record> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 12);

    let gym = &rows[2];
    assert_eq!(gym.transaction_date, "7/20/25");
    assert_eq!(gym.post_date, "7/21/25");
    assert_eq!(gym.description, "Gym");
    assert_eq!(gym.category, "Health & Wellness");
    assert_eq!(gym.transaction_type, "Sale");
    assert_eq!(gym.amount, "-40.00");
    assert_eq!(gym.memo, "monthly, auto renew");

    assert_eq!(rows[4].category, "");
}

#[test]
fn test_extra_columns_ignored() {
    let reader = TransactionReader::open(&fixture_filename("extra_columns.csv")).unwrap();
    let rows: Vec<Record> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Coffee Shop");
    assert_eq!(rows[0].transaction_date, "8/2/25");
    assert_eq!(rows[1].amount, "-11.99");
    assert_eq!(rows[1].memo, "online");
}

#[test]
fn test_missing_category() {
    let result = TransactionReader::open(&fixture_filename("missing_category.csv"));
    match result {
        Err(e) => {
            assert_eq!(e, CsvError::MissingFieldsError(vec!["Category".to_string()]));
            assert!(e.to_string().contains("Category"));
        },
        Ok(_) => panic!("Header without 'Category' should be rejected")
    }
}

#[test]
fn test_short_row() {
    let mut reader = TransactionReader::open(&fixture_filename("short_row.csv")).unwrap();
    assert!(matches!(reader.next(), Some(Ok(_))));
    assert!(matches!(reader.next(), Some(Err(CsvError::InvalidRowError(_)))));
}

#[test]
fn test_row_without_memo_position() {
    let reader = TransactionReader::open(&fixture_filename("no_memo.csv")).unwrap();
    let rows: Vec<Record> = reader.collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "Coffee Shop");
    assert_eq!(rows[0].amount, "-5.50");
    assert_eq!(rows[0].memo, "");
    assert_eq!(rows[1].memo, "");
}

#[test]
fn test_directory_is_not_a_missing_file() {
    let result = TransactionReader::open(&fixture_dir());
    assert!(matches!(result, Err(CsvError::ReadError(_))));
}

#[test]
fn test_file_not_found() {
    let result = TransactionReader::open(&fixture_filename("no_such_file.csv"));
    assert!(matches!(result, Err(CsvError::FileNotFoundError(_))));
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
