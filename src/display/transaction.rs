//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{CurrencyFormat, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], currency: &CurrencyFormat) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date().format("%Y-%m-%d").to_string(),
        description: truncate(txn.description(), 30),
        category: txn.category().name().to_string(),
        kind: txn.transaction_type().to_string(),
        amount: txn.amount().format_with(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionType};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn lunch() -> Transaction {
        Transaction::new(
            "1",
            "Lunch at restaurant",
            Money::new(45.0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            Arc::new(Category::new("Food", ["lunch"])),
            TransactionType::Expense,
        )
        .unwrap()
    }

    #[test]
    fn test_table() {
        let output = format_transaction_table(&[lunch()], &CurrencyFormat::pt_br());
        assert!(output.contains("Description"));
        assert!(output.contains("2024-01-15"));
        assert!(output.contains("R$ 45,00"));
        assert!(output.contains("EXPENSE"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], &CurrencyFormat::pt_br()),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
