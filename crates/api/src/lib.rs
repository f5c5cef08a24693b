//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for cost ingestion, monthly reports and user summaries
//! - The error type that turns domain failures into JSON responses

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use costwise_db::ExpenseStore;
use costwise_shared::AppConfig;
use costwise_shared::config::{AboutConfig, CostsConfig};

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for users and costs.
    pub store: Arc<dyn ExpenseStore>,
    /// Team listed by the about endpoint.
    pub about: Arc<AboutConfig>,
    /// Cost ingestion settings.
    pub costs: CostsConfig,
}

impl AppState {
    /// Builds the state from a store and the loaded configuration.
    #[must_use]
    pub fn new(store: Arc<dyn ExpenseStore>, config: &AppConfig) -> Self {
        Self {
            store,
            about: Arc::new(config.about.clone()),
            costs: config.costs,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
