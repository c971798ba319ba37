//! Load pipeline orchestration.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

use insightboard_core::ingest::normalize_document_with;
use insightboard_core::{Error, RecordStore, Result, StorageConfig};

/// Load statistics.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadStats {
    /// Records parsed from the input.
    pub parsed: u64,
    /// Records written to the store (0 on a dry run).
    pub loaded: u64,
    /// Records that received a derived SWOT value.
    pub swot_derived: u64,
    /// Present integer fields that could not be coerced and were stored as null.
    pub coerced_nulls: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
}

impl LoadStats {
    /// Calculate throughput (records per second).
    #[must_use]
    pub fn throughput(&self) -> f64 {
        if self.duration_secs > 0.0 {
            self.parsed as f64 / self.duration_secs
        } else {
            0.0
        }
    }
}

/// What to load and where.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// JSON file holding an array of record objects.
    pub input: PathBuf,
    /// Destination store.
    pub storage: StorageConfig,
    /// Parse and normalize only; never open the store.
    pub dry_run: bool,
    /// Draw a progress bar on stderr.
    pub show_progress: bool,
}

impl LoadOptions {
    /// Options for loading `input` into the store described by `storage`.
    pub fn new(input: impl Into<PathBuf>, storage: StorageConfig) -> Self {
        Self {
            input: input.into(),
            storage,
            dry_run: false,
            show_progress: false,
        }
    }
}

/// One-shot import: read, normalize, replace.
pub struct LoadPipeline {
    options: LoadOptions,
}

impl LoadPipeline {
    /// Create a new load pipeline.
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Run the load.
    ///
    /// The store is opened only after the whole input has been normalized,
    /// and its contents are replaced in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the input cannot be read,
    /// [`Error::InvalidInput`] if it is not a JSON array of objects, and a
    /// storage error if the replace fails (the previous contents are kept).
    pub async fn run(&self) -> Result<LoadStats> {
        let start = std::time::Instant::now();
        let mut stats = LoadStats::default();

        info!("Loading records from {:?}", self.options.input);

        let text = tokio::fs::read_to_string(&self.options.input).await?;
        let root: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidInput(format!("failed to parse JSON: {e}")))?;

        let total = root.as_array().map_or(0, Vec::len) as u64;
        let progress = create_progress_bar(total, self.options.show_progress);
        let normalized = normalize_document_with(&root, || progress.inc(1));
        let (records, normalize_stats) = match normalized {
            Ok(result) => result,
            Err(e) => {
                progress.abandon_with_message("Invalid input");
                return Err(e);
            }
        };
        progress.finish_with_message("Normalized");

        stats.parsed = records.len() as u64;
        stats.swot_derived = normalize_stats.swot_derived as u64;
        stats.coerced_nulls = normalize_stats.coerced_nulls as u64;

        if self.options.dry_run {
            info!("Dry run mode - not writing to the store");
        } else {
            let store = RecordStore::open(&self.options.storage).await?;
            stats.loaded = store.replace_all(&records).await?;
            debug!(rows = store.count().await?, "Store row count after load");
        }

        stats.duration_secs = start.elapsed().as_secs_f64();

        info!(
            "Load complete: {} parsed, {} loaded, {} SWOT derived, {} coerced to null in {:.2}s ({:.0} rec/sec)",
            stats.parsed,
            stats.loaded,
            stats.swot_derived,
            stats.coerced_nulls,
            stats.duration_secs,
            stats.throughput()
        );

        Ok(stats)
    }
}

fn create_progress_bar(total: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_stats_throughput() {
        let stats = LoadStats {
            parsed: 1000,
            loaded: 1000,
            swot_derived: 10,
            coerced_nulls: 0,
            duration_secs: 2.0,
        };

        assert!((stats.throughput() - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_load_stats_zero_duration() {
        let stats = LoadStats::default();
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_load_options_defaults() {
        let options = LoadOptions::new("data.json", StorageConfig::default());

        assert!(!options.dry_run);
        assert!(!options.show_progress);
        assert_eq!(options.input, PathBuf::from("data.json"));
    }
}
