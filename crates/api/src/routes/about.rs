//! Development team listing.

use axum::{Json, Router, extract::State, routing::get};

use costwise_shared::config::TeamMember;

use crate::AppState;

async fn list_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.about.team.clone())
}

/// Creates the about route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/about", get(list_team))
}
