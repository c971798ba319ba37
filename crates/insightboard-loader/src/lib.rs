// Import tool - pedantic lints relaxed for CLI ergonomics
#![allow(clippy::pedantic)]

//! # `InsightBoard` Loader
//!
//! `insightboard-loader` is a CLI tool and library that imports a JSON array
//! of loosely-typed records into the `InsightBoard` store, replacing whatever
//! the store held before.
//!
//! ## Quick Start
//!
//! ```bash
//! # Load a file into the default database
//! insightboard-load jsondata.json
//!
//! # Parse and normalize only (preview)
//! insightboard-load validate --input jsondata.json
//! ```
//!
//! The input is read and normalized completely before the store is opened, so
//! a malformed file never changes the stored records.

#![warn(missing_docs)]

pub mod pipeline;

pub use pipeline::{LoadOptions, LoadPipeline, LoadStats};
