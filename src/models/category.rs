//! Category model and keyword categorization
//!
//! A category is a named set of keywords plus the transaction types it
//! accepts. Categorization scans an ordered slice of categories and picks the
//! first one whose keywords appear in the description, so the order of that
//! slice is the priority order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::transaction::TransactionType;

/// Name of the synthetic category used when nothing matches
pub const FALLBACK_CATEGORY: &str = "Others";

/// A keyword-driven spending/income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    name: String,
    keywords: Vec<String>,
    /// `None` means every transaction type is allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allowed_types: Option<Vec<TransactionType>>,
}

impl Category {
    /// Create a category that accepts both income and expenses
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            allowed_types: None,
        }
    }

    /// Restrict the category to the given transaction types
    pub fn with_allowed_types(mut self, allowed: &[TransactionType]) -> Self {
        self.allowed_types = Some(allowed.to_vec());
        self
    }

    /// The synthetic "Others" category: no keywords, any type
    pub fn fallback() -> Self {
        Self::new(FALLBACK_CATEGORY, Vec::<String>::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The accepted transaction types (both when unrestricted)
    pub fn allowed_types(&self) -> Vec<TransactionType> {
        self.allowed_types
            .clone()
            .unwrap_or_else(|| TransactionType::all().to_vec())
    }

    /// Check whether a transaction of this type may use the category
    pub fn allows_type(&self, transaction_type: TransactionType) -> bool {
        match &self.allowed_types {
            Some(allowed) => allowed.contains(&transaction_type),
            None => true,
        }
    }

    /// True if any keyword occurs in the description, ignoring case
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| description.contains(&k.to_lowercase()))
    }

    /// Pick the first matching category, in slice order, or the fallback
    pub fn categorize(description: &str, categories: &[Arc<Category>]) -> Arc<Category> {
        categories
            .iter()
            .find(|c| c.matches(description))
            .cloned()
            .unwrap_or_else(|| Arc::new(Category::fallback()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The built-in category set, in priority order
pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};

    vec![
        Category::new(
            "Food",
            ["restaurant", "market", "grocery", "lunch", "dinner", "food"],
        )
        .with_allowed_types(&[Expense]),
        Category::new(
            "Transport",
            ["uber", "bus", "gasoline", "taxi", "subway", "fuel"],
        )
        .with_allowed_types(&[Expense]),
        Category::new(
            "Housing",
            ["rent", "mortgage", "electricity", "water bill", "internet", "condo"],
        )
        .with_allowed_types(&[Expense]),
        Category::new("Leisure", ["cinema", "movie", "netflix", "spotify", "game"])
            .with_allowed_types(&[Expense]),
        Category::new(
            "Health",
            ["doctor", "hospital", "medicine", "pharmacy", "health"],
        )
        .with_allowed_types(&[Expense]),
        Category::new("Salary", ["salary", "paycheck", "payroll"]).with_allowed_types(&[Income]),
        Category::new(
            "Extra Income",
            ["freelance", "side job", "extra income", "bonus"],
        )
        .with_allowed_types(&[Income]),
    ]
}
