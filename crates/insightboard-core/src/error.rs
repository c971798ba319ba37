//! Error types for `InsightBoard`.
//!
//! A single error type covers the store, the query service and ingest.
//! Error codes follow the pattern `IBRD-XXX`.

use thiserror::Error;

/// Result type alias for `InsightBoard` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `InsightBoard` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Load input could not be interpreted as an array of records (IBRD-001).
    ///
    /// Raised before the store is touched, so previous contents stay intact.
    #[error("[IBRD-001] Invalid input: {0}")]
    InvalidInput(String),

    /// Database connectivity or query failure (IBRD-002).
    #[error("[IBRD-002] Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema creation failed (IBRD-003).
    #[error("[IBRD-003] Schema migration failed: {0}")]
    Migration(String),

    /// Configuration error (IBRD-004).
    #[error("[IBRD-004] Configuration error: {0}")]
    Config(String),

    /// IO error (IBRD-005).
    #[error("[IBRD-005] IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the error code (e.g., "IBRD-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "IBRD-001",
            Self::Database(_) => "IBRD-002",
            Self::Migration(_) => "IBRD-003",
            Self::Config(_) => "IBRD-004",
            Self::Io(_) => "IBRD-005",
        }
    }

    /// Returns true if the failure happened in the storage layer.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Migration(_))
    }
}
