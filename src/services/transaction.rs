//! Transaction service
//!
//! Creation workflow (categorize, validate, persist) plus lookup and removal
//! of stored transactions.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub description: String,
    pub amount: Money,
    pub transaction_type: TransactionType,
    /// Defaults to the current time when absent
    pub date: Option<DateTime<Utc>>,
}

impl CreateTransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            transaction_type,
            date: None,
        }
    }

    /// Set an explicit transaction date
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create, categorize and store a new transaction
    ///
    /// The category is the first stored category whose keywords match the
    /// description, or the `Others` fallback.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty description and `CategoryTypeMismatch`
    /// when the matched category does not accept the transaction type.
    /// Nothing is stored on error.
    pub fn create(&self, input: CreateTransactionInput) -> SpendwiseResult<Transaction> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(SpendwiseError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        let categories = self.storage.categories.find_all_categories()?;
        let category = Category::categorize(description, &categories);
        debug!(
            description,
            category = category.name(),
            "Categorized transaction"
        );

        let txn = Transaction::new(
            TransactionId::new(),
            description,
            input.amount,
            input.date.unwrap_or_else(Utc::now),
            category,
            input.transaction_type,
        )?;

        self.storage.transactions.save_transaction(txn.clone())?;
        info!(
            id = %txn.id(),
            category = txn.category().name(),
            transaction_type = %txn.transaction_type(),
            "Created transaction"
        );

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> SpendwiseResult<Option<Transaction>> {
        self.storage.transactions.find_transaction_by_id(id)
    }

    /// List all transactions in insertion order
    pub fn list(&self) -> SpendwiseResult<Vec<Transaction>> {
        self.storage.transactions.find_all_transactions()
    }

    /// List the transactions assigned to a category
    pub fn list_by_category(&self, category: &str) -> SpendwiseResult<Vec<Transaction>> {
        self.storage.transactions.find_transactions_by_category(category)
    }

    /// Delete a transaction
    ///
    /// # Errors
    ///
    /// `NotFound` when no transaction has the given id.
    pub fn delete(&self, id: &TransactionId) -> SpendwiseResult<()> {
        if !self.storage.transactions.delete_transaction(id)? {
            return Err(SpendwiseError::transaction_not_found(id.as_str()));
        }

        info!(id = %id, "Deleted transaction");
        Ok(())
    }
}
