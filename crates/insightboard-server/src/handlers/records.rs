//! Record listing handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::types::{ErrorResponse, RecordResponse};
use crate::AppState;

/// List records matching the query-string filters.
///
/// Every recognized key with a value other than `""` or `All` adds an exact,
/// case-sensitive equality constraint. Other parameters are ignored. When a
/// key repeats, its first occurrence is used.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "records",
    params(
        ("topic" = Option<String>, Query, description = "Exact topic"),
        ("end_year" = Option<String>, Query, description = "Exact end year"),
        ("sector" = Option<String>, Query, description = "Exact sector"),
        ("region" = Option<String>, Query, description = "Exact region"),
        ("pestle" = Option<String>, Query, description = "Exact PESTLE category"),
        ("source" = Option<String>, Query, description = "Exact source"),
        ("country" = Option<String>, Query, description = "Exact country"),
        ("city" = Option<String>, Query, description = "Exact city"),
        ("swot" = Option<String>, Query, description = "Strength, Weakness, Opportunity or Threat")
    ),
    responses(
        (status = 200, description = "Matching records", body = Vec<RecordResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    match state.service.list_records_by_pairs(params).await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "Listed records");
            let body: Vec<RecordResponse> = records.into_iter().map(Into::into).collect();
            Json(body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, code = e.code(), "Failed to list records");
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
