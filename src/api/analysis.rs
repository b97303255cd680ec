//! Analysis endpoint

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use super::dto::AnalysisQuery;
use super::error::ApiError;
use super::AppState;
use crate::models::parse_datetime;
use crate::services::AnalysisService;

/// Axum handler function for GET /analysis
///
/// `startDate` and `endDate` only filter when both are present.
pub async fn get_analysis(
    State(state): State<AppState>,
    query: Result<Query<AnalysisQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    info!("GET /analysis - query: {:?}", query);

    let start = parse_bound(query.start_date.as_deref(), "startDate")?;
    let end = parse_bound(query.end_date.as_deref(), "endDate")?;

    let analysis = AnalysisService::new(&state.storage).analysis(start, end)?;
    Ok(Json(analysis))
}

fn parse_bound(
    raw: Option<&str>,
    name: &str,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, ApiError> {
    match raw {
        None => Ok(None),
        Some(value) => parse_datetime(value)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid {}: {}", name, value))),
    }
}
