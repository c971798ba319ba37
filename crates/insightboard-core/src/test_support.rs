//! Shared fixtures for store-backed unit tests.

use tempfile::TempDir;

use crate::record::{NewRecord, Swot};
use crate::store::RecordStore;

/// Opens an empty store in a fresh temporary directory.
///
/// The directory must outlive the store, so it is returned alongside it.
pub(crate) async fn temp_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("records.db").display());
    let store = RecordStore::connect(&url)
        .await
        .expect("Failed to open store");
    (dir, store)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Six records covering nulls, empty strings and a case-variant topic.
///
/// | # | topic | region           | country      | end_year | intensity | likelihood | relevance |
/// |---|-------|------------------|--------------|----------|-----------|------------|-----------|
/// | 1 | oil   | Northern America | United States| 2030     | 6         | 3          | 2         |
/// | 2 | oil   | Northern America | United States| 2030     | 10        | 4          | 4         |
/// | 3 | gas   | Western Asia     | Saudi Arabia | -        | 4         | -          | 3         |
/// | 4 | ""    | ""               | -            | ""       | 20        | 5          | -         |
/// | 5 | Oil   | Europe           | Norway       | 2025     | -         | 2          | 1         |
/// | 6 | -     | Europe           | Norway       | 2025     | 8         | -          | -         |
pub(crate) fn sample_records() -> Vec<NewRecord> {
    vec![
        NewRecord {
            topic: text("oil"),
            region: text("Northern America"),
            country: text("United States of America"),
            end_year: text("2030"),
            intensity: Some(6),
            likelihood: Some(3),
            relevance: Some(2),
            sector: text("Energy"),
            pestle: text("Industries"),
            source: text("EIA"),
            insight: text("Shale output is a key strength"),
            swot: Some(Swot::Strength),
            ..NewRecord::default()
        },
        NewRecord {
            topic: text("oil"),
            region: text("Northern America"),
            country: text("United States of America"),
            end_year: text("2030"),
            intensity: Some(10),
            likelihood: Some(4),
            relevance: Some(4),
            sector: text("Energy"),
            pestle: text("Economic"),
            source: text("EIA"),
            ..NewRecord::default()
        },
        NewRecord {
            topic: text("gas"),
            region: text("Western Asia"),
            country: text("Saudi Arabia"),
            intensity: Some(4),
            relevance: Some(3),
            sector: text("Energy"),
            pestle: text("Political"),
            source: text("Reuters"),
            title: text("Supply threat in the Gulf"),
            swot: Some(Swot::Threat),
            ..NewRecord::default()
        },
        NewRecord {
            topic: text(""),
            region: text(""),
            end_year: text(""),
            intensity: Some(20),
            likelihood: Some(5),
            sector: text(""),
            ..NewRecord::default()
        },
        NewRecord {
            topic: text("Oil"),
            region: text("Europe"),
            country: text("Norway"),
            end_year: text("2025"),
            likelihood: Some(2),
            relevance: Some(1),
            city: text("Oslo"),
            ..NewRecord::default()
        },
        NewRecord {
            region: text("Europe"),
            country: text("Norway"),
            end_year: text("2025"),
            intensity: Some(8),
            ..NewRecord::default()
        },
    ]
}

/// A store preloaded with [`sample_records`].
pub(crate) async fn sample_store() -> (TempDir, RecordStore) {
    let (dir, store) = temp_store().await;
    store
        .replace_all(&sample_records())
        .await
        .expect("Failed to load sample records");
    (dir, store)
}
