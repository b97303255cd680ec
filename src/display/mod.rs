//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, bar charts and ranking markers.

pub mod analysis;
pub mod category;
pub mod report;
pub mod transaction;

pub use analysis::format_analysis;
pub use category::{format_categorization, format_category_table};
pub use transaction::format_transaction_table;
