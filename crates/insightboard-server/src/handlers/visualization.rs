//! Visualization aggregate handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::{ErrorResponse, VisualizationResponse};
use crate::AppState;

/// Grouped averages and topic counts for the dashboard charts.
#[utoipa::path(
    get,
    path = "/api/visualization-data",
    tag = "visualization",
    responses(
        (status = 200, description = "Aggregates", body = VisualizationResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn visualization_data(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.visualization_summary().await {
        Ok(summary) => Json(VisualizationResponse::from(summary)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, code = e.code(), "Failed to compute visualization data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
