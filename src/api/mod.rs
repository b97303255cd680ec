//! HTTP API for Spendwise
//!
//! An axum router over the transaction and analysis workflows. The
//! composition root builds the stores once and hands them to every handler
//! through [`AppState`].

pub mod analysis;
pub mod dto;
pub mod error;
pub mod system;
pub mod transactions;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerSettings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Category;
use crate::storage::Storage;

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "Spendwise API";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub service_name: &'static str,
}

impl AppState {
    /// Create new application state around existing stores
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            service_name: SERVICE_NAME,
        }
    }

    /// Fresh in-memory stores seeded with `categories`
    pub fn in_memory(categories: Vec<Category>) -> Self {
        Self::new(Storage::in_memory(categories))
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/transactions/:id",
            get(transactions::get_transaction).delete(transactions::delete_transaction),
        )
        .route("/analysis", get(analysis::get_analysis))
        .route("/categories", get(system::list_categories))
        .route("/health", get(system::health))
        .fallback(system::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn serve(settings: &ServerSettings, state: AppState) -> SpendwiseResult<()> {
    let addr: SocketAddr = settings.bind_address().parse().map_err(|e| {
        SpendwiseError::Config(format!("Invalid listen address {}: {}", settings.bind_address(), e))
    })?;

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
