//! Storage layer for Spendwise
//!
//! Defines the store contracts the services depend on and the in-memory
//! repositories that implement them. Every read hands out a copy, so callers
//! always work on a consistent snapshot.

pub mod categories;
pub mod transactions;

pub use categories::CategoryRepository;
pub use transactions::TransactionRepository;

use std::sync::Arc;

use crate::error::SpendwiseResult;
use crate::models::{Category, Period, Transaction, TransactionId};

/// Contract for transaction persistence
pub trait TransactionStore: Send + Sync {
    /// Insert a transaction, replacing any existing one with the same id
    fn save_transaction(&self, transaction: Transaction) -> SpendwiseResult<()>;

    /// Get a transaction by id
    fn find_transaction_by_id(&self, id: &TransactionId) -> SpendwiseResult<Option<Transaction>>;

    /// All transactions in insertion order
    fn find_all_transactions(&self) -> SpendwiseResult<Vec<Transaction>>;

    /// Transactions whose date falls inside the period (inclusive)
    fn find_transactions_by_period(&self, period: &Period) -> SpendwiseResult<Vec<Transaction>>;

    /// Transactions assigned to the named category
    fn find_transactions_by_category(&self, name: &str) -> SpendwiseResult<Vec<Transaction>>;

    /// Remove a transaction; returns false when the id is unknown
    fn delete_transaction(&self, id: &TransactionId) -> SpendwiseResult<bool>;
}

/// Contract for category persistence
///
/// `find_all_categories` must preserve priority order since categorization
/// picks the first match.
pub trait CategoryStore: Send + Sync {
    /// All categories in priority order
    fn find_all_categories(&self) -> SpendwiseResult<Vec<Arc<Category>>>;

    /// Get a category by exact name
    fn find_category_by_name(&self, name: &str) -> SpendwiseResult<Option<Arc<Category>>>;

    /// Replace the category with the same name in place, or append it
    fn upsert_category(&self, category: Category) -> SpendwiseResult<()>;
}

/// Storage coordinator that owns one repository of each kind
#[derive(Clone)]
pub struct Storage {
    pub transactions: Arc<dyn TransactionStore>,
    pub categories: Arc<dyn CategoryStore>,
}

impl Storage {
    /// Build in-memory stores seeded with the given categories
    pub fn in_memory(categories: Vec<Category>) -> Self {
        Self {
            transactions: Arc::new(TransactionRepository::new()),
            categories: Arc::new(CategoryRepository::with_categories(categories)),
        }
    }

    /// Build in-memory stores seeded with the built-in categories
    pub fn with_default_categories() -> Self {
        Self::in_memory(crate::models::default_categories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_creation() {
        let storage = Storage::with_default_categories();

        assert_eq!(storage.categories.find_all_categories().unwrap().len(), 7);
        assert!(storage.transactions.find_all_transactions().unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let storage = Storage::in_memory(Vec::new());
        let other = storage.clone();

        other
            .categories
            .upsert_category(Category::new("Food", ["lunch"]))
            .unwrap();

        assert!(storage.categories.find_category_by_name("Food").unwrap().is_some());
    }
}
