//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod about;
pub mod costs;
pub mod health;
pub mod reports;
pub mod users;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(about::routes())
        .merge(costs::routes())
        .merge(reports::routes())
        .merge(users::routes())
}
