//! # `InsightBoard` Core
//!
//! Storage and query layer for a dashboard of analytical records (topic,
//! sector, region, intensity, likelihood, ...).
//!
//! ## Components
//!
//! - **Store** ([`RecordStore`]): one SQLite table of denormalized records,
//!   replaced wholesale by the loader and otherwise read-only.
//! - **Query Service** ([`QueryService`]): filtered listing, distinct filter
//!   values and grouped averages/counts for visualizations.
//! - **Ingest** ([`ingest`]): normalization of loosely-typed JSON input
//!   (integer coercion, SWOT derivation).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use insightboard_core::{QueryService, RecordFilter, RecordStore};
//!
//! let store = RecordStore::connect("sqlite://insightboard.db").await?;
//! let (records, _) = insightboard_core::ingest::parse_document(&json)?;
//! store.replace_all(&records).await?;
//!
//! let service = QueryService::new(store);
//! let oil = service
//!     .list_records(&RecordFilter::from_pairs([("topic", "oil")]))
//!     .await?;
//! let summary = service.visualization_summary().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod filter;
#[cfg(test)]
mod filter_tests;
pub mod ingest;
pub mod query;
pub mod record;
pub mod store;
#[cfg(test)]
mod test_support;

pub use config::{ConfigError, InsightConfig, LoggingConfig, ServerConfig, StorageConfig};
pub use error::{Error, Result};
pub use filter::{FilterColumn, RecordFilter, ALL_SENTINEL};
pub use ingest::{coerce_int, derive_swot, parse_document, NormalizeStats};
pub use query::{FilterValues, QueryService, VisualizationSummary};
pub use record::{NewRecord, Record, Swot};
pub use store::{GroupColumn, MetricColumn, RecordStore};
