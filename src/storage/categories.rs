//! In-memory category repository
//!
//! Keeps categories in a vector because the order is the categorization
//! priority.

use std::sync::{Arc, RwLock};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Category;

use super::CategoryStore;

/// Repository for categories, ordered by priority
pub struct CategoryRepository {
    categories: RwLock<Vec<Arc<Category>>>,
}

impl CategoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    /// Create a repository seeded with categories, keeping their order
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories.into_iter().map(Arc::new).collect()),
        }
    }

    /// Number of stored categories
    pub fn count(&self) -> SpendwiseResult<usize> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.len())
    }
}

impl Default for CategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore for CategoryRepository {
    fn find_all_categories(&self) -> SpendwiseResult<Vec<Arc<Category>>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    fn find_category_by_name(&self, name: &str) -> SpendwiseResult<Option<Arc<Category>>> {
        let categories = self
            .categories
            .read()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.iter().find(|c| c.name() == name).cloned())
    }

    fn upsert_category(&self, category: Category) -> SpendwiseResult<()> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let category = Arc::new(category);
        match categories.iter().position(|c| c.name() == category.name()) {
            Some(index) => categories[index] = category,
            None => categories.push(category),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn seeded() -> CategoryRepository {
        CategoryRepository::with_categories(vec![
            Category::new("Food", ["restaurant"]),
            Category::new("Transport", ["uber"]),
        ])
    }

    #[test]
    fn test_find_all_keeps_order() {
        let repo = seeded();
        let names: Vec<_> = repo
            .find_all_categories()
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Food", "Transport"]);
    }

    #[test]
    fn test_find_by_name() {
        let repo = seeded();
        assert_eq!(
            repo.find_category_by_name("Transport").unwrap().unwrap().name(),
            "Transport"
        );
        assert!(repo.find_category_by_name("transport").unwrap().is_none());
        assert!(repo.find_category_by_name("Health").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let repo = seeded();
        repo.upsert_category(
            Category::new("Food", ["lunch"]).with_allowed_types(&[TransactionType::Expense]),
        )
        .unwrap();

        let all = repo.find_all_categories().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name(), "Food");
        assert_eq!(all[0].keywords(), &["lunch".to_string()]);
        assert!(!all[0].allows_type(TransactionType::Income));
    }

    #[test]
    fn test_upsert_appends_new_category() {
        let repo = seeded();
        repo.upsert_category(Category::new("Health", ["doctor"])).unwrap();

        let all = repo.find_all_categories().unwrap();
        assert_eq!(repo.count().unwrap(), 3);
        assert_eq!(all[2].name(), "Health");
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_writes() {
        let repo = seeded();
        let snapshot = repo.find_all_categories().unwrap();

        repo.upsert_category(Category::new("Health", ["doctor"])).unwrap();

        assert_eq!(snapshot.len(), 2);
    }
}
