//! Common test utilities for insightboard-server integration tests.

#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use insightboard_core::{ingest::parse_document, QueryService, RecordStore};
use insightboard_server::{api_router, AppState};

/// Loader-style input covering string integers, nulls and SWOT derivation.
pub const FIXTURE: &str = r#"[
  {"end_year": "2027", "intensity": 6, "sector": "Energy", "topic": "oil",
   "insight": "Shale output is a key strength", "region": "Northern America",
   "country": "United States of America", "relevance": "2", "pestle": "Industries",
   "source": "EIA", "title": "US oil", "likelihood": 3, "city": ""},
  {"end_year": 2027, "intensity": "10", "sector": "Energy", "topic": "oil",
   "region": "Northern America", "country": "United States of America",
   "relevance": 4, "pestle": "Economic", "source": "EIA", "likelihood": "4"},
  {"end_year": "", "intensity": 4, "sector": "Energy", "topic": "gas",
   "region": "Western Asia", "country": "Saudi Arabia", "relevance": 3,
   "pestle": "Political", "source": "Reuters", "title": "Supply threat in the Gulf",
   "likelihood": null},
  {"intensity": "seven", "topic": "Oil", "region": "Europe", "country": "Norway",
   "end_year": 2025, "likelihood": 2, "relevance": 1, "city": "Oslo",
   "insight": "New opportunities offshore"}
]"#;

/// Opens a store in `temp_dir` and loads [`FIXTURE`] into it.
pub async fn create_test_store(temp_dir: &TempDir) -> RecordStore {
    let url = format!("sqlite://{}", temp_dir.path().join("records.db").display());
    let store = RecordStore::connect(&url)
        .await
        .expect("Failed to open store");
    let (records, _) = parse_document(FIXTURE).expect("Fixture should parse");
    store
        .replace_all(&records)
        .await
        .expect("Failed to load fixture");
    store
}

/// Helper to create test app with all routes
pub async fn create_test_app(temp_dir: &TempDir) -> Router {
    let store = create_test_store(temp_dir).await;
    app_for(store)
}

/// Builds the router over an existing store.
pub fn app_for(store: RecordStore) -> Router {
    let state = Arc::new(AppState {
        service: QueryService::new(store),
    });
    api_router(state)
}

/// Issues a GET and returns the status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}
