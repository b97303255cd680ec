//! Health, category listing and the not-found fallback

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use tracing::info;

use super::dto::{format_timestamp, CategoryResponse, HealthResponse};
use super::error::ApiError;
use super::AppState;

/// Axum handler function for GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: format_timestamp(Utc::now()),
        service: state.service_name.to_string(),
    })
}

/// Axum handler function for GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /categories");

    let categories = state.storage.categories.find_all_categories()?;
    let body: Vec<CategoryResponse> = categories
        .iter()
        .map(|c| CategoryResponse::from(c.as_ref()))
        .collect();
    Ok(Json(body))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
