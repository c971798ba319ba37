//! Tests for the `filter` module.

use crate::filter::{FilterColumn, RecordFilter, ALL_SENTINEL};
use crate::record::{Record, Swot};

fn record(topic: Option<&str>, swot: Option<Swot>) -> Record {
    Record {
        id: 1,
        end_year: None,
        intensity: None,
        sector: None,
        topic: topic.map(str::to_string),
        insight: None,
        url: None,
        region: None,
        start_year: None,
        impact: None,
        added: None,
        published: None,
        country: None,
        relevance: None,
        pestle: None,
        source: None,
        title: None,
        likelihood: None,
        city: None,
        swot,
    }
}

#[test]
fn test_filter_column_keys_round_trip() {
    for column in FilterColumn::ALL {
        assert_eq!(FilterColumn::from_key(column.name()), Some(column));
    }
    assert_eq!(FilterColumn::ALL.len(), 9);
}

#[test]
fn test_filter_column_rejects_unknown_and_non_whitelisted_keys() {
    assert_eq!(FilterColumn::from_key("page"), None);
    assert_eq!(FilterColumn::from_key("intensity"), None);
    assert_eq!(FilterColumn::from_key("Topic"), None);
}

#[test]
fn test_from_pairs_drops_ignorable_entries() {
    let filter = RecordFilter::from_pairs([
        ("topic", "oil"),
        ("region", ALL_SENTINEL),
        ("country", ""),
        ("limit", "10"),
    ]);

    assert_eq!(filter.len(), 1);
    assert_eq!(filter.value(FilterColumn::Topic), Some("oil"));
    assert_eq!(filter.value(FilterColumn::Region), None);
}

#[test]
fn test_from_pairs_only_ignorable_is_empty() {
    let filter = RecordFilter::from_pairs([("topic", "All"), ("sector", ""), ("foo", "bar")]);

    assert!(filter.is_empty());
    assert_eq!(filter, RecordFilter::new());
}

#[test]
fn test_from_pairs_first_occurrence_wins() {
    let filter = RecordFilter::from_pairs([("topic", "oil"), ("topic", "gas")]);
    assert_eq!(filter.value(FilterColumn::Topic), Some("oil"));

    let filter = RecordFilter::from_pairs([("topic", "All"), ("topic", "gas")]);
    assert!(filter.is_empty());
}

#[test]
fn test_all_sentinel_is_case_sensitive() {
    let filter = RecordFilter::from_pairs([("topic", "all")]);

    assert_eq!(filter.value(FilterColumn::Topic), Some("all"));
}

#[test]
fn test_with_replaces_existing_condition() {
    let filter = RecordFilter::new()
        .with(FilterColumn::City, "Oslo")
        .with(FilterColumn::City, "Bergen");

    assert_eq!(filter.len(), 1);
    assert_eq!(filter.value(FilterColumn::City), Some("Bergen"));
}

#[test]
fn test_matches_excludes_null_columns() {
    let filter = RecordFilter::new().with(FilterColumn::Topic, "oil");

    assert!(filter.matches(&record(Some("oil"), None)));
    assert!(!filter.matches(&record(Some("Oil"), None)));
    assert!(!filter.matches(&record(None, None)));
}

#[test]
fn test_matches_swot_by_name() {
    let filter = RecordFilter::new().with(FilterColumn::Swot, "Weakness");

    assert!(filter.matches(&record(None, Some(Swot::Weakness))));
    assert!(!filter.matches(&record(None, Some(Swot::Threat))));
}

#[test]
fn test_empty_filter_matches_everything() {
    assert!(RecordFilter::new().matches(&record(None, None)));
}
