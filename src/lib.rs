//! Spendwise - personal finance tracking with automatic categorization
//!
//! Transactions are assigned a category by matching keywords against their
//! description, checked against the transaction types that category
//! accepts, and aggregated into totals, a balance and a per-category
//! breakdown of expenses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, categories, transactions and periods (pure)
//! - `error`: Custom error types
//! - `storage`: Store traits and the in-memory repositories
//! - `services`: Creation, import and analysis workflows
//! - `api`: axum HTTP surface
//! - `display`: Terminal rendering
//! - `cli`: Command handlers for the binary
//! - `config`: Paths and settings
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use spendwise::models::default_categories;
//! use spendwise::models::{Money, TransactionType};
//! use spendwise::services::{CreateTransactionInput, TransactionService};
//! use spendwise::storage::Storage;
//!
//! let storage = Storage::in_memory(default_categories());
//! let txn = TransactionService::new(&storage)
//!     .create(CreateTransactionInput::new(
//!         "Lunch at the restaurant",
//!         Money::new(45.0).unwrap(),
//!         TransactionType::Expense,
//!     ))
//!     .unwrap();
//! assert_eq!(txn.category().name(), "Food");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
