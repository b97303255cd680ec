//! CSV Import service
//!
//! Reads `date,description,amount,type` rows and feeds each one through the
//! transaction creation workflow, so imported rows are categorized exactly
//! like transactions created over the API.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{parse_datetime, Money, TransactionType};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Column positions, resolved from the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: usize,
    pub amount_column: usize,
    pub type_column: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            amount_column: 2,
            type_column: 3,
        }
    }
}

impl ColumnMapping {
    /// Resolve columns by header name, keeping the default position for any
    /// header that is not recognised
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut mapping = Self::default();

        for (idx, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "date" | "data" => mapping.date_column = idx,
                "description" | "descricao" | "descrição" => mapping.description_column = idx,
                "amount" | "valor" => mapping.amount_column = idx,
                "type" | "tipo" => mapping.type_column = idx,
                _ => {}
            }
        }

        mapping
    }
}

/// A parsed row from the CSV before import
#[derive(Debug, Clone)]
pub struct ParsedTransaction {
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: Money,
    pub transaction_type: TransactionType,
}

impl From<ParsedTransaction> for CreateTransactionInput {
    fn from(parsed: ParsedTransaction) -> Self {
        CreateTransactionInput::new(parsed.description, parsed.amount, parsed.transaction_type)
            .on(parsed.date)
    }
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of transactions imported
    pub imported: usize,
    /// Error messages by row number
    pub errors: BTreeMap<usize, String>,
}

impl ImportResult {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import every row of a CSV file
    pub fn import_file(&self, path: &Path) -> SpendwiseResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            SpendwiseError::Import(format!("Cannot open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(file)
    }

    /// Import every row read from `input`; the first row must be a header
    ///
    /// Bad rows are collected in the result instead of aborting the import.
    pub fn import_from_reader<R: Read>(&self, input: R) -> SpendwiseResult<ImportResult> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let parsed = self.parse_csv_from_reader(&mut reader)?;
        let service = TransactionService::new(self.storage);
        let mut result = ImportResult::default();

        for (idx, row) in parsed.into_iter().enumerate() {
            let outcome = row.and_then(|txn| service.create(txn.into()).map_err(|e| e.to_string()));

            match outcome {
                Ok(_) => result.imported += 1,
                Err(message) => {
                    warn!(row = idx + 1, error = %message, "Skipping CSV row");
                    result.errors.insert(idx + 1, message);
                }
            }
        }

        info!(
            imported = result.imported,
            errors = result.error_count(),
            "CSV import finished"
        );
        Ok(result)
    }

    /// Parse a CSV from a reader into transactions
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: &mut Reader<R>,
    ) -> SpendwiseResult<Vec<Result<ParsedTransaction, String>>> {
        let mapping = ColumnMapping::from_headers(reader.headers()?);

        let results = reader
            .records()
            .map(|record| match record {
                Ok(record) => parse_record(&record, &mapping),
                Err(e) => Err(format!("Error reading CSV record: {}", e)),
            })
            .collect();

        Ok(results)
    }
}

fn parse_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<ParsedTransaction, String> {
    let raw_date = field(record, mapping.date_column, "date")?;
    let date = parse_date(raw_date).ok_or_else(|| format!("Could not parse date: '{}'", raw_date))?;

    let description = field(record, mapping.description_column, "description")?.to_string();

    let amount =
        Money::parse(field(record, mapping.amount_column, "amount")?).map_err(|e| e.to_string())?;

    let transaction_type: TransactionType = field(record, mapping.type_column, "type")?
        .parse()
        .map_err(|e: SpendwiseError| e.to_string())?;

    Ok(ParsedTransaction {
        date,
        description,
        amount,
        transaction_type,
    })
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str) -> Result<&'r str, String> {
    record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing {} column", name))
}

/// Parse a date as RFC 3339, `YYYY-MM-DD`, `DD/MM/YYYY` or `YYYY/MM/DD`
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Some(date) = parse_datetime(s) {
        return Some(date);
    }

    ["%d/%m/%Y", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s.trim(), format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
