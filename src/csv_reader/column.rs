use std::collections::HashMap;
use csv::StringRecord;
use crate::csv_reader::CsvError;

pub(crate) const TRANSACTION_DATE: &str = "Transaction Date";
pub(crate) const POST_DATE: &str = "Post Date";
pub(crate) const DESCRIPTION: &str = "Description";
pub(crate) const CATEGORY: &str = "Category";
pub(crate) const TYPE: &str = "Type";
pub(crate) const AMOUNT: &str = "Amount";
pub(crate) const MEMO: &str = "Memo";

/// Columns every activity export must carry. Order is used when reporting missing columns.
pub(crate) const REQUIRED_FIELDS: [&str; 7] = [TRANSACTION_DATE, POST_DATE, DESCRIPTION, CATEGORY, TYPE, AMOUNT, MEMO];

/// Contains column index of an activity export.
/// The column number uses 0-based index.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ColumnInfo {
    pub(crate) transaction_date_column: usize,
    pub(crate) post_date_column: usize,
    pub(crate) description_column: usize,
    pub(crate) category_column: usize,
    pub(crate) type_column: usize,
    pub(crate) amount_column: usize,
    pub(crate) memo_column: usize,
}

/// Locate required columns from the header row. Matching is exact and case-sensitive,
/// unknown columns are ignored. Fails listing every required column that is absent.
pub(crate) fn parse_csv_column_with_header(headers: &StringRecord) -> Result<ColumnInfo, CsvError> {
    // Later duplicates win
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, s) in headers.iter().enumerate() {
        index.insert(s, i);
    }

    let missing: Vec<String> = REQUIRED_FIELDS.iter()
        .filter(|field| !index.contains_key(*field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CsvError::MissingFieldsError(missing));
    }

    Ok(ColumnInfo {
        transaction_date_column: index[TRANSACTION_DATE],
        post_date_column: index[POST_DATE],
        description_column: index[DESCRIPTION],
        category_column: index[CATEGORY],
        type_column: index[TYPE],
        amount_column: index[AMOUNT],
        memo_column: index[MEMO],
    })
}

impl ColumnInfo {
    /// Fetch a required column from a data row
    pub(crate) fn field<'r>(&self, row: &'r StringRecord, column: usize, name: &str) -> Result<&'r str, CsvError> {
        row.get(column).ok_or_else(|| {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            CsvError::InvalidRowError(format!("line {line} has no '{name}' value"))
        })
    }
}
