//! HTTP handlers for the InsightBoard REST API.
//!
//! - `health`: liveness plus record count
//! - `records`: filtered record listing
//! - `filters`: distinct values per filter key
//! - `visualization`: grouped aggregates for the dashboard charts

pub mod filters;
pub mod health;
pub mod records;
pub mod visualization;

pub use filters::list_filters;
pub use health::health_check;
pub use records::list_records;
pub use visualization::visualization_data;
