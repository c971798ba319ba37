//! Filter value handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::types::{ErrorResponse, FilterValuesResponse};
use crate::AppState;

/// Distinct non-empty values for each of the nine filter keys.
#[utoipa::path(
    get,
    path = "/api/filters",
    tag = "filters",
    responses(
        (status = 200, description = "Filter values by key", body = FilterValuesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_filters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.list_filter_values().await {
        Ok(values) => Json(FilterValuesResponse::from(values)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, code = e.code(), "Failed to list filter values");
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
