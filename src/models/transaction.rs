//! Transaction model
//!
//! A transaction records a single income or expense event. The amount is a
//! magnitude; the direction lives in [`TransactionType`]. Transactions are
//! validated against their category when built and never change afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use crate::error::{SpendwiseError, SpendwiseResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    #[serde(alias = "RECEITA", alias = "income")]
    Income,
    #[serde(alias = "DESPESA", alias = "expense")]
    Expense,
}

impl TransactionType {
    /// Both types, income first
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = SpendwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" | "RECEITA" => Ok(Self::Income),
            "EXPENSE" | "DESPESA" => Ok(Self::Expense),
            _ => Err(SpendwiseError::Validation(
                "Type must be either INCOME or EXPENSE".into(),
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    amount: Money,
    date: DateTime<Utc>,
    category: Arc<Category>,
    transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction, checking that the category accepts its type
    ///
    /// # Errors
    ///
    /// Returns `CategoryTypeMismatch` when `category` does not allow
    /// `transaction_type`. Nothing is created in that case.
    pub fn new(
        id: impl Into<TransactionId>,
        description: impl Into<String>,
        amount: Money,
        date: DateTime<Utc>,
        category: Arc<Category>,
        transaction_type: TransactionType,
    ) -> SpendwiseResult<Self> {
        if !category.allows_type(transaction_type) {
            return Err(SpendwiseError::CategoryTypeMismatch {
                category: category.name().to_string(),
                transaction_type,
            });
        }

        Ok(Self {
            id: id.into(),
            description: description.into(),
            amount,
            date,
            category,
            transaction_type,
        })
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn category(&self) -> &Arc<Category> {
        &self.category
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// The unsigned amount used in totals
    pub fn absolute_amount(&self) -> Money {
        self.amount.abs()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.transaction_type,
            self.amount,
            self.category.name(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn food() -> Arc<Category> {
        Arc::new(Category::new("Food", ["restaurant", "market"]))
    }

    fn salary() -> Arc<Category> {
        Arc::new(Category::new("Salary", ["salary"]).with_allowed_types(&[TransactionType::Income]))
    }

    fn jan_15() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            "1",
            "Lunch at the restaurant",
            Money::new(50.0).unwrap(),
            jan_15(),
            food(),
            TransactionType::Expense,
        )
        .unwrap();

        assert_eq!(txn.id().as_str(), "1");
        assert_eq!(txn.description(), "Lunch at the restaurant");
        assert_eq!(txn.amount().cents(), 5000);
        assert_eq!(txn.date(), jan_15());
        assert_eq!(txn.category().name(), "Food");
        assert_eq!(txn.transaction_type(), TransactionType::Expense);
    }

    #[test]
    fn test_expense_and_income_helpers() {
        let expense = Transaction::new(
            "1",
            "Lunch",
            Money::new(50.0).unwrap(),
            jan_15(),
            food(),
            TransactionType::Expense,
        )
        .unwrap();
        assert!(expense.is_expense());
        assert!(!expense.is_income());

        let income = Transaction::new(
            "2",
            "Salary",
            Money::new(3000.0).unwrap(),
            jan_15(),
            food(),
            TransactionType::Income,
        )
        .unwrap();
        assert!(income.is_income());
        assert!(!income.is_expense());
        assert_eq!(income.absolute_amount().cents(), 300000);
    }

    #[test]
    fn test_category_type_mismatch() {
        let result = Transaction::new(
            "invalid-1",
            "Salary as an expense?",
            Money::new(3000.0).unwrap(),
            jan_15(),
            salary(),
            TransactionType::Expense,
        );

        match result {
            Err(SpendwiseError::CategoryTypeMismatch {
                category,
                transaction_type,
            }) => {
                assert_eq!(category, "Salary");
                assert_eq!(transaction_type, TransactionType::Expense);
            }
            other => panic!("expected CategoryTypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_allowed_restricted_type() {
        let txn = Transaction::new(
            "valid-1",
            "Monthly salary",
            Money::new(3000.0).unwrap(),
            jan_15(),
            salary(),
            TransactionType::Income,
        );
        assert!(txn.is_ok());
    }

    #[test]
    fn test_transaction_type_parsing() {
        assert_eq!("INCOME".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert_eq!("RECEITA".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("despesa".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("TRANSFER".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_transaction_type_serialization() {
        assert_eq!(serde_json::to_string(&TransactionType::Income).unwrap(), "\"INCOME\"");
        let parsed: TransactionType = serde_json::from_str("\"DESPESA\"").unwrap();
        assert_eq!(parsed, TransactionType::Expense);
    }
}
