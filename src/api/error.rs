//! Error responses for the HTTP API
//!
//! Every failure is rendered as `{ "error": message }`. Server-side failures
//! never expose their details.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::SpendwiseError;

/// JSON error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error ready to be turned into an HTTP response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<SpendwiseError> for ApiError {
    fn from(err: SpendwiseError) -> Self {
        if err.is_client_error() {
            warn!("Rejected request: {}", err);
            Self::bad_request(client_message(&err))
        } else if err.is_not_found() {
            Self::not_found(err.to_string())
        } else {
            error!("Request failed: {:?}", err);
            Self::internal()
        }
    }
}

/// Domain messages are returned as-is; validation messages lose their prefix
fn client_message(err: &SpendwiseError) -> String {
    match err {
        SpendwiseError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected JSON body: {}", rejection.body_text());
        Self::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
