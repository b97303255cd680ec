//! Custom error types for Spendwise
//!
//! Domain rule violations (`InvalidAmount`, `CategoryTypeMismatch`,
//! `InvalidPeriod`) are raised where they happen. The remaining variants
//! belong to the stores, configuration and import collaborators.

use thiserror::Error;

use crate::models::TransactionType;

/// The main error type for Spendwise operations
#[derive(Error, Debug)]
pub enum SpendwiseError {
    /// Money constructed from a negative or non-finite value
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Transaction type not permitted by its category
    #[error("Category '{category}' does not allow transaction type '{transaction_type}'")]
    CategoryTypeMismatch {
        category: String,
        transaction_type: TransactionType,
    },

    /// Period whose start is after its end
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod { start: String, end: String },

    /// Validation errors for incoming data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendwiseError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error was caused by the caller's input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::CategoryTypeMismatch { .. }
                | Self::InvalidPeriod { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for SpendwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendwiseError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for Spendwise operations
pub type SpendwiseResult<T> = Result<T, SpendwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_type_mismatch_message() {
        let err = SpendwiseError::CategoryTypeMismatch {
            category: "Salary".into(),
            transaction_type: TransactionType::Expense,
        };
        assert_eq!(
            err.to_string(),
            "Category 'Salary' does not allow transaction type 'EXPENSE'"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_not_found_error() {
        let err = SpendwiseError::transaction_not_found("42");
        assert_eq!(err.to_string(), "Transaction not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendwiseError = io_err.into();
        assert!(matches!(err, SpendwiseError::Io(_)));
    }
}
