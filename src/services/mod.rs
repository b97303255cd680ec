//! Service layer for Spendwise
//!
//! The service layer provides the workflows on top of the storage layer:
//! creating categorized transactions, importing them from CSV and running
//! the financial analysis.

pub mod analysis;
pub mod import;
pub mod transaction;

pub use analysis::{
    AnalysisService, CategorySummary, FinancialAnalysis, FinancialAnalysisService,
};
pub use import::{ImportResult, ImportService};
pub use transaction::{CreateTransactionInput, TransactionService};
