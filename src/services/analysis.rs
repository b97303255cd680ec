//! Financial analysis
//!
//! `FinancialAnalysisService` is the pure aggregation over a slice of
//! transactions: totals, balance, per-category expense breakdown and the
//! largest expense categories. `AnalysisService` is the workflow that pulls
//! transactions from storage, applies an optional period and runs it.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::error::SpendwiseResult;
use crate::models::{Money, Period, Transaction};
use crate::storage::Storage;

/// Number of categories reported in `top_expenses`
pub const TOP_EXPENSES_LIMIT: usize = 3;

/// Expense breakdown for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Category name
    pub category: String,
    /// Sum of expense amounts in this category
    pub total: Money,
    /// Share of total expenses, 0.0 to 100.0
    pub percentage: f64,
    /// Number of expense transactions in this category
    pub transaction_count: usize,
}

/// Result of analyzing a set of transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; negative when spending exceeds income
    pub balance: Money,
    /// One entry per expense category, in first-seen order
    pub category_summaries: Vec<CategorySummary>,
    /// Highest-total categories, at most `TOP_EXPENSES_LIMIT`
    pub top_expenses: Vec<CategorySummary>,
}

impl FinancialAnalysis {
    /// Analysis of no transactions at all
    pub fn empty() -> Self {
        Self {
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            balance: Money::zero(),
            category_summaries: Vec::new(),
            top_expenses: Vec::new(),
        }
    }

    /// Total number of expense transactions covered by the summaries
    pub fn expense_count(&self) -> usize {
        self.category_summaries
            .iter()
            .map(|s| s.transaction_count)
            .sum()
    }
}

/// Stateless aggregation over transactions
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialAnalysisService;

impl FinancialAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the given transactions
    ///
    /// Expenses are grouped by category name. Ties in `top_expenses` keep
    /// the order in which the categories were first seen.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` when a total no longer fits in the money range.
    pub fn analyze(&self, transactions: &[Transaction]) -> SpendwiseResult<FinancialAnalysis> {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        // (total, count) per category, plus first-seen order
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        let mut seen_order: Vec<&str> = Vec::new();

        for txn in transactions {
            if txn.is_income() {
                total_income = total_income.checked_add(txn.absolute_amount())?;
                continue;
            }

            total_expenses = total_expenses.checked_add(txn.absolute_amount())?;

            let name = txn.category().name();
            let entry = by_category.entry(name).or_insert_with(|| {
                seen_order.push(name);
                (Money::zero(), 0)
            });
            entry.0 = entry.0.checked_add(txn.absolute_amount())?;
            entry.1 += 1;
        }

        let category_summaries: Vec<CategorySummary> = seen_order
            .iter()
            .filter_map(|name| {
                by_category.get(name).map(|(total, count)| CategorySummary {
                    category: name.to_string(),
                    total: *total,
                    percentage: percentage_of(*total, total_expenses),
                    transaction_count: *count,
                })
            })
            .collect();

        // sort_by is stable, so equal totals stay in first-seen order
        let mut top_expenses = category_summaries.clone();
        top_expenses.sort_by(|a, b| b.total.cmp(&a.total));
        top_expenses.truncate(TOP_EXPENSES_LIMIT);

        Ok(FinancialAnalysis {
            total_income,
            total_expenses,
            balance: total_income.checked_sub(total_expenses)?,
            category_summaries,
            top_expenses,
        })
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}

/// Service for retrieving an analysis of stored transactions
pub struct AnalysisService<'a> {
    storage: &'a Storage,
}

impl<'a> AnalysisService<'a> {
    /// Create a new analysis service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Analyze stored transactions, optionally restricted to a period
    ///
    /// The period filter only applies when both bounds are given; a lone
    /// bound is ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when `start` is after `end`.
    pub fn analysis(
        &self,
        start: Option<chrono::DateTime<chrono::Utc>>,
        end: Option<chrono::DateTime<chrono::Utc>>,
    ) -> SpendwiseResult<FinancialAnalysis> {
        let transactions = match (start, end) {
            (Some(start), Some(end)) => {
                let period = Period::new(start, end)?;
                debug!(period = %period, "Analyzing transactions in period");
                self.storage.transactions.find_transactions_by_period(&period)?
            }
            _ => self.storage.transactions.find_all_transactions()?,
        };

        debug!(count = transactions.len(), "Running financial analysis");
        FinancialAnalysisService::new().analyze(&transactions)
    }
}
