#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_for_each)]
//! InsightBoard Server - REST API library for the InsightBoard dashboard.
//!
//! This module provides the HTTP handlers and types for the read-only
//! dashboard API.
//!
//! ## OpenAPI Documentation
//!
//! The API is documented using OpenAPI 3.0. Access the interactive documentation at:
//! - Swagger UI: `GET /swagger-ui`
//! - OpenAPI JSON: `GET /api-docs/openapi.json`

mod handlers;
mod types;

use axum::{routing::get, Router};
use insightboard_core::QueryService;
use std::sync::Arc;
use utoipa::OpenApi;

// Re-export types for external use
pub use types::*;

// Re-export handlers for routing
pub use handlers::{health_check, list_filters, list_records, visualization_data};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// InsightBoard API Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "InsightBoard API",
        version = "0.3.0",
        description = "Read-only access to analytical records: filtered listing, \
            filter values and visualization aggregates.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "records", description = "Filtered record listing"),
        (name = "filters", description = "Distinct filter values"),
        (name = "visualization", description = "Dashboard aggregates")
    ),
    paths(
        handlers::health::health_check,
        handlers::records::list_records,
        handlers::filters::list_filters,
        handlers::visualization::visualization_data
    ),
    components(
        schemas(
            RecordResponse,
            FilterValuesResponse,
            RegionIntensityItem,
            TopicLikelihoodItem,
            CountryRelevanceItem,
            YearIntensityItem,
            TopicCountItem,
            VisualizationResponse,
            HealthResponse,
            ErrorResponse
        )
    )
)]
pub struct ApiDoc;

// ============================================================================
// Application State
// ============================================================================

/// Application state shared across handlers.
pub struct AppState {
    /// Read operations over the record store.
    pub service: QueryService,
}

/// Routes of the dashboard API, without docs or middleware layers.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/data", get(list_records))
        .route("/api/filters", get(list_filters))
        .route("/api/visualization-data", get(visualization_data))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generation() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("InsightBoard API"), "Should contain API title");
        assert!(json.contains("0.3.0"), "Should contain version");
    }

    #[test]
    fn test_openapi_has_all_endpoints() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        assert!(json.contains("/health"), "Should document /health");
        assert!(json.contains("/api/data"), "Should document /api/data");
        assert!(json.contains("/api/filters"), "Should document /api/filters");
        assert!(
            json.contains("/api/visualization-data"),
            "Should document /api/visualization-data"
        );
    }

    #[test]
    fn test_openapi_documents_filter_params() {
        let openapi = ApiDoc::openapi();
        let json = openapi.to_json().expect("Failed to serialize OpenAPI spec");
        for key in ["topic", "end_year", "pestle", "swot"] {
            assert!(json.contains(&format!("\"{key}\"")), "Should document {key}");
        }
    }
}
