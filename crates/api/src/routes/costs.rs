//! Cost ingestion.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use costwise_core::{Cost, CostDraft};
use costwise_shared::AppError;

use crate::{AppState, error::ApiError};

/// Response for a stored cost.
#[derive(Debug, Serialize)]
pub struct AddCostResponse {
    /// Confirmation text.
    pub message: &'static str,
    /// The stored record.
    pub cost: Cost,
}

/// Creates the cost routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/add", post(add_cost))
}

async fn add_cost(
    State(state): State<AppState>,
    payload: Result<Json<CostDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<AddCostResponse>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let new_cost = draft.validate(Utc::now())?;

    if state.costs.require_existing_user && state.store.find_user(new_cost.user_id).await?.is_none()
    {
        return Err(AppError::NotFound("User not found".to_string()).into());
    }

    let cost = state.store.insert_cost(new_cost).await?;
    info!(
        cost_id = %cost.id,
        user_id = %cost.user_id,
        category = %cost.category,
        "Cost added"
    );

    Ok((
        StatusCode::CREATED,
        Json(AddCostResponse {
            message: "Cost item added successfully",
            cost,
        }),
    ))
}
