//! Core data models for Spendwise
//!
//! Money, categories, transactions and reporting periods. Everything in
//! this module is pure: no I/O, no logging, no shared mutable state.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{default_categories, Category, FALLBACK_CATEGORY};
pub use ids::TransactionId;
pub use money::{CurrencyFormat, Money, MAX_CENTS};
pub use period::{parse_datetime, Period};
pub use transaction::{Transaction, TransactionType};
