//! Transaction endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::dto::{CreateTransactionRequest, TransactionListQuery, TransactionResponse};
use super::error::ApiError;
use super::AppState;
use crate::models::TransactionId;
use crate::services::TransactionService;

/// Axum handler function for POST /transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    info!("POST /transactions - request: {:?}", request);

    let input = request.into_input()?;
    let txn = TransactionService::new(&state.storage).create(input)?;

    Ok((StatusCode::CREATED, Json(TransactionResponse::from(&txn))))
}

/// Axum handler function for GET /transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /transactions - query: {:?}", query);

    let service = TransactionService::new(&state.storage);
    let transactions = match query.category.as_deref() {
        Some(category) => service.list_by_category(category)?,
        None => service.list()?,
    };

    let body: Vec<TransactionResponse> = transactions.iter().map(TransactionResponse::from).collect();
    Ok(Json(body))
}

/// Axum handler function for GET /transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /transactions/{}", id);

    let id = TransactionId::from(id);
    match TransactionService::new(&state.storage).get(&id)? {
        Some(txn) => Ok(Json(TransactionResponse::from(&txn))),
        None => Err(ApiError::not_found("Transaction not found")),
    }
}

/// Axum handler function for DELETE /transactions/:id
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /transactions/{}", id);

    TransactionService::new(&state.storage).delete(&TransactionId::from(id))?;
    Ok(StatusCode::NO_CONTENT)
}
