//! Category display formatting

use std::sync::Arc;

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Category, TransactionType};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    priority: usize,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Keywords")]
    keywords: String,
}

/// Format categories as a table in priority order
pub fn format_category_table(categories: &[Arc<Category>]) -> String {
    if categories.is_empty() {
        return "No categories configured.\n".to_string();
    }

    let rows = categories.iter().enumerate().map(|(i, c)| CategoryRow {
        priority: i + 1,
        name: c.name().to_string(),
        types: format_types(&c.allowed_types()),
        keywords: c.keywords().join(", "),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Describe the categorization outcome for one description
pub fn format_categorization(
    description: &str,
    category: &Category,
    transaction_type: Option<TransactionType>,
) -> String {
    let verdict = match transaction_type {
        Some(t) if category.allows_type(t) => format!(" ✓ {} allowed", t),
        Some(t) => format!(" ✗ {} not allowed", t),
        None => String::new(),
    };

    format!("\"{}\" → {}{}", description, category.name(), verdict)
}

fn format_types(types: &[TransactionType]) -> String {
    types
        .iter()
        .map(TransactionType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_category_table() {
        let categories: Vec<_> = default_categories().into_iter().map(Arc::new).collect();
        let output = format_category_table(&categories);

        assert!(output.contains("Food"));
        assert!(output.contains("restaurant, market"));
        assert!(output.contains("INCOME"));
    }

    #[test]
    fn test_categorization_verdict() {
        let salary = Category::new("Salary", ["salary"]).with_allowed_types(&[TransactionType::Income]);

        assert_eq!(
            format_categorization("Monthly salary", &salary, None),
            "\"Monthly salary\" → Salary"
        );
        assert!(format_categorization("Monthly salary", &salary, Some(TransactionType::Income))
            .ends_with("✓ INCOME allowed"));
        assert!(format_categorization("Monthly salary", &salary, Some(TransactionType::Expense))
            .ends_with("✗ EXPENSE not allowed"));
    }
}
