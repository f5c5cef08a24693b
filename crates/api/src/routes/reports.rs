//! Monthly report route.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use tracing::debug;

use costwise_core::reports::{MonthlyReport, ReportParams, ReportRequest, ReportService};
use costwise_shared::AppError;

use crate::{AppState, error::ApiError};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report", get(get_report))
}

async fn get_report(
    State(state): State<AppState>,
    query: Result<Query<ReportParams>, QueryRejection>,
) -> Result<Json<MonthlyReport>, ApiError> {
    let Query(params) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = ReportRequest::from_params(&params)?;

    let costs = state
        .store
        .costs_in_range(request.user_id, &request.range)
        .await?;
    debug!(
        user_id = %request.user_id,
        year = request.year,
        month = request.month,
        count = costs.len(),
        "Building monthly report"
    );

    Ok(Json(ReportService::build(&request, costs)))
}
