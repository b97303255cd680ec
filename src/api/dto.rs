//! Request and response bodies for the HTTP API

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{parse_datetime, Category, Money, Transaction, TransactionType};
use crate::services::CreateTransactionInput;

/// Body of `POST /transactions`
///
/// Every field is optional at the wire level so that missing fields are
/// reported with a 400 and a readable message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionRequest {
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    pub date: Option<String>,
}

impl CreateTransactionRequest {
    /// Check the request and convert it into workflow input
    ///
    /// # Errors
    ///
    /// `Validation` for missing fields, an unknown type or an unparsable
    /// date; `InvalidAmount` for a negative amount.
    pub fn into_input(self) -> SpendwiseResult<CreateTransactionInput> {
        let (Some(description), Some(amount), Some(transaction_type)) =
            (self.description, self.amount, self.transaction_type)
        else {
            return Err(SpendwiseError::Validation(
                "Missing required fields: description, amount, type".into(),
            ));
        };

        if description.trim().is_empty() {
            return Err(SpendwiseError::Validation(
                "Missing required fields: description, amount, type".into(),
            ));
        }

        let transaction_type: TransactionType = transaction_type.parse()?;
        let amount = Money::new(amount)?;
        let mut input = CreateTransactionInput::new(description, amount, transaction_type);

        if let Some(raw) = self.date {
            let date = parse_datetime(&raw)
                .ok_or_else(|| SpendwiseError::Validation(format!("Invalid date: {}", raw)))?;
            input = input.on(date);
        }

        Ok(input)
    }
}

/// Query of `GET /transactions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionListQuery {
    pub category: Option<String>,
}

/// Query of `GET /analysis`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Transaction as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub description: String,
    pub amount: f64,
    /// RFC 3339 in UTC with millisecond precision
    pub date: String,
    /// Category name
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl From<&Transaction> for TransactionResponse {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id().to_string(),
            description: txn.description().to_string(),
            amount: txn.amount().value(),
            date: format_timestamp(txn.date()),
            category: txn.category().name().to_string(),
            transaction_type: txn.transaction_type(),
        }
    }
}

/// Category as returned by `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub name: String,
    pub keywords: Vec<String>,
    pub allowed_types: Vec<TransactionType>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name().to_string(),
            keywords: category.keywords().to_vec(),
            allowed_types: category.allowed_types(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
