//! User summary route.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use tracing::debug;

use costwise_core::users::parse_user_id;
use costwise_core::{UserLookupError, UserSummary};

use crate::{AppState, error::ApiError};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users/{id}", get(get_user))
}

async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserSummary>, ApiError> {
    let id = parse_user_id(&raw_id)?;
    let user = state
        .store
        .find_user(id)
        .await?
        .ok_or(UserLookupError::NotFound(id))?;
    let total = state.store.total_for_user(id).await?;
    debug!(user_id = %id, %total, "User summary");

    Ok(Json(UserSummary::new(user, total)))
}
