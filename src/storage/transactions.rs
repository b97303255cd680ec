//! In-memory transaction repository
//!
//! Transactions are keyed by id, with an insertion-order list for listing
//! and a category-name index for category queries.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Period, Transaction, TransactionId};

use super::TransactionStore;

#[derive(Default)]
struct TransactionIndex {
    data: HashMap<TransactionId, Transaction>,
    /// Ids in insertion order
    order: Vec<TransactionId>,
    /// Index: category name -> transaction ids
    by_category: HashMap<String, Vec<TransactionId>>,
}

impl TransactionIndex {
    fn collect<'a>(&self, ids: impl Iterator<Item = &'a TransactionId>) -> Vec<Transaction> {
        ids.filter_map(|id| self.data.get(id).cloned()).collect()
    }

    fn unindex_category(&mut self, category: &str, id: &TransactionId) {
        if let Some(ids) = self.by_category.get_mut(category) {
            ids.retain(|existing| existing != id);
            if ids.is_empty() {
                self.by_category.remove(category);
            }
        }
    }
}

/// Repository for transactions with indexing
pub struct TransactionRepository {
    index: RwLock<TransactionIndex>,
}

impl TransactionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            index: RwLock::new(TransactionIndex::default()),
        }
    }

    /// Number of stored transactions
    pub fn count(&self) -> SpendwiseResult<usize> {
        Ok(self.read()?.data.len())
    }

    fn read(&self) -> SpendwiseResult<RwLockReadGuard<'_, TransactionIndex>> {
        self.index
            .read()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> SpendwiseResult<RwLockWriteGuard<'_, TransactionIndex>> {
        self.index
            .write()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for TransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for TransactionRepository {
    fn save_transaction(&self, transaction: Transaction) -> SpendwiseResult<()> {
        let mut index = self.write()?;
        let id = transaction.id().clone();
        let category = transaction.category().name().to_string();

        let previous_category = index
            .data
            .get(&id)
            .map(|existing| existing.category().name().to_string());

        match previous_category {
            Some(previous) => index.unindex_category(&previous, &id),
            None => index.order.push(id.clone()),
        }

        index.by_category.entry(category).or_default().push(id.clone());
        index.data.insert(id, transaction);
        Ok(())
    }

    fn find_transaction_by_id(&self, id: &TransactionId) -> SpendwiseResult<Option<Transaction>> {
        Ok(self.read()?.data.get(id).cloned())
    }

    fn find_all_transactions(&self) -> SpendwiseResult<Vec<Transaction>> {
        let index = self.read()?;
        Ok(index.collect(index.order.iter()))
    }

    fn find_transactions_by_period(&self, period: &Period) -> SpendwiseResult<Vec<Transaction>> {
        let index = self.read()?;
        Ok(index
            .collect(index.order.iter())
            .into_iter()
            .filter(|t| period.contains(t.date()))
            .collect())
    }

    fn find_transactions_by_category(&self, name: &str) -> SpendwiseResult<Vec<Transaction>> {
        let index = self.read()?;
        let ids = index.by_category.get(name).map(|v| v.as_slice()).unwrap_or(&[]);
        Ok(index.collect(ids.iter()))
    }

    fn delete_transaction(&self, id: &TransactionId) -> SpendwiseResult<bool> {
        let mut index = self.write()?;

        let Some(removed) = index.data.remove(id) else {
            return Ok(false);
        };

        index.order.retain(|existing| existing != id);
        index.unindex_category(removed.category().name(), id);
        Ok(true)
    }
}
