//! Analysis display formatting
//!
//! Renders a `FinancialAnalysis` as an overview block, the top expense
//! categories with medals and a per-category bar chart.

use tabled::{settings::Style, Table, Tabled};

use super::report::{
    double_separator, format_bar, format_money_colored, format_percentage, rank_marker, section,
};
use crate::models::CurrencyFormat;
use crate::services::FinancialAnalysis;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the full analysis report
pub fn format_analysis(analysis: &FinancialAnalysis, currency: &CurrencyFormat) -> String {
    let mut output = String::new();

    output.push_str(&double_separator(50));
    output.push_str("\nFinancial Analysis\n");
    output.push_str(&double_separator(50));
    output.push_str("\n\n");

    output.push_str(&format_overview(analysis, currency));
    output.push('\n');

    if analysis.category_summaries.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    output.push_str(&format_top_expenses(analysis, currency));
    output.push('\n');
    output.push_str(&format_category_breakdown(analysis, currency));

    output
}

/// Income, expenses and balance
pub fn format_overview(analysis: &FinancialAnalysis, currency: &CurrencyFormat) -> String {
    let mut output = section("Overview");
    output.push_str(&format!(
        "  Income:   {}\n",
        analysis.total_income.format_with(currency)
    ));
    output.push_str(&format!(
        "  Expenses: {} ({} transaction(s))\n",
        analysis.total_expenses.format_with(currency),
        analysis.expense_count()
    ));
    output.push_str(&format!(
        "  Balance:  {}\n",
        format_money_colored(analysis.balance, currency)
    ));
    output
}

/// Ranked list of the largest expense categories
pub fn format_top_expenses(analysis: &FinancialAnalysis, currency: &CurrencyFormat) -> String {
    let mut output = section("Top Expenses");
    for (i, summary) in analysis.top_expenses.iter().enumerate() {
        output.push_str(&format!(
            "  {} {:<15} {:>14} ({})\n",
            rank_marker(i + 1),
            summary.category,
            summary.total.format_with(currency),
            format_percentage(summary.percentage)
        ));
    }
    output
}

/// Table of every expense category in first-seen order
pub fn format_category_breakdown(
    analysis: &FinancialAnalysis,
    currency: &CurrencyFormat,
) -> String {
    let max = analysis
        .category_summaries
        .iter()
        .map(|s| s.total.value())
        .fold(0.0, f64::max);

    let rows: Vec<SummaryRow> = analysis
        .category_summaries
        .iter()
        .map(|s| SummaryRow {
            category: s.category.clone(),
            total: s.total.format_with(currency),
            share: format_percentage(s.percentage),
            count: s.transaction_count,
            bar: format_bar(s.total.value(), max, BAR_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = section("Expenses by Category");
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, TransactionType};
    use crate::services::FinancialAnalysisService;
    use chrono::Utc;
    use std::sync::Arc;

    fn txn(category: &str, amount: f64, kind: TransactionType) -> Transaction {
        Transaction::new(
            crate::models::TransactionId::new(),
            category,
            Money::new(amount).unwrap(),
            Utc::now(),
            Arc::new(Category::new(category, Vec::<String>::new())),
            kind,
        )
        .unwrap()
    }

    #[test]
    fn test_format_analysis() {
        let analysis = FinancialAnalysisService::new().analyze(&[
            txn("Food", 265.0, TransactionType::Expense),
            txn("Housing", 950.0, TransactionType::Expense),
            txn("Transport", 20.0, TransactionType::Expense),
            txn("Salary", 3000.0, TransactionType::Income),
        ])
        .unwrap();

        let output = format_analysis(&analysis, &CurrencyFormat::pt_br());

        assert!(output.contains("Financial Analysis"));
        assert!(output.contains("R$ 3.000,00"));
        assert!(output.contains("Expenses: R$ 1.235,00 (3 transaction(s))"));
        assert!(output.contains("R$ 1.765,00"));
        assert!(output.contains("🥇 Housing"));
        assert!(output.contains("Expenses by Category"));
        assert!(output.contains("Transport"));
    }

    #[test]
    fn test_format_empty_analysis() {
        let output = format_analysis(&FinancialAnalysis::empty(), &CurrencyFormat::en_us());

        assert!(output.contains("$0.00"));
        assert!(output.contains("No expenses recorded."));
        assert!(!output.contains("Top Expenses"));
    }
}
