//! Normalization of loosely-typed JSON input into [`NewRecord`]s.
//!
//! Source documents are JSON arrays of objects whose numeric fields may be
//! strings, numbers or missing. Normalization never fails on a field: values
//! that cannot be coerced become `None`. Only a document that is not an array
//! of objects is rejected, and that happens before any store mutation.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{NewRecord, Swot};

/// Counters collected while normalizing a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records produced.
    pub records: usize,
    /// Records that received a SWOT classification.
    pub swot_derived: usize,
    /// Integer fields that were present but could not be coerced.
    pub coerced_nulls: usize,
}

/// Coerces a loosely-typed JSON value to an integer.
///
/// - `null` → `None`
/// - integer numbers → the integer
/// - finite floats → truncated toward zero (`7.9` → `7`), `None` if out of range
/// - strings → trimmed and parsed as base-10 `i64`; empty or unparseable → `None`
/// - booleans, arrays, objects → `None`
#[must_use]
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            let truncated = f.trunc();
            (truncated >= i64::MIN as f64 && truncated < i64::MAX as f64).then(|| truncated as i64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<i64>().ok()
            }
        }
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Scans text for the first SWOT keyword, case-insensitively.
#[must_use]
pub fn classify_text(text: &str) -> Option<Swot> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    Swot::ALL
        .into_iter()
        .find(|swot| lowered.contains(swot.keyword()))
}

/// Derives the SWOT class from the insight, falling back to the title.
#[must_use]
pub fn derive_swot(insight: Option<&str>, title: Option<&str>) -> Option<Swot> {
    insight
        .and_then(classify_text)
        .or_else(|| title.and_then(classify_text))
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn int_field(obj: &Map<String, Value>, key: &str, stats: &mut NormalizeStats) -> Option<i64> {
    let value = obj.get(key)?;
    let coerced = coerce_int(value);
    let blank = value.is_null() || value.as_str().is_some_and(|s| s.trim().is_empty());
    if coerced.is_none() && !blank {
        stats.coerced_nulls += 1;
    }
    coerced
}

/// Normalizes one JSON object into a record ready for insertion.
///
/// Unknown keys (including `id`) are ignored.
pub fn normalize_entry(obj: &Map<String, Value>, stats: &mut NormalizeStats) -> NewRecord {
    let insight = text_field(obj, "insight");
    let title = text_field(obj, "title");
    let swot = derive_swot(insight.as_deref(), title.as_deref());
    if swot.is_some() {
        stats.swot_derived += 1;
    }
    stats.records += 1;

    NewRecord {
        end_year: int_field(obj, "end_year", stats).map(|y| y.to_string()),
        intensity: int_field(obj, "intensity", stats),
        sector: text_field(obj, "sector"),
        topic: text_field(obj, "topic"),
        insight,
        url: text_field(obj, "url"),
        region: text_field(obj, "region"),
        start_year: int_field(obj, "start_year", stats).map(|y| y.to_string()),
        impact: int_field(obj, "impact", stats),
        added: text_field(obj, "added"),
        published: text_field(obj, "published"),
        country: text_field(obj, "country"),
        relevance: int_field(obj, "relevance", stats),
        pestle: text_field(obj, "pestle"),
        source: text_field(obj, "source"),
        title,
        likelihood: int_field(obj, "likelihood", stats),
        city: text_field(obj, "city"),
        swot,
    }
}

/// Normalizes an already-parsed document.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the root is not an array or an element
/// is not an object.
pub fn normalize_document(root: &Value) -> Result<(Vec<NewRecord>, NormalizeStats)> {
    normalize_document_with(root, || {})
}

/// Like [`normalize_document`], calling `on_entry` after each element.
///
/// # Errors
///
/// See [`normalize_document`].
pub fn normalize_document_with<F>(
    root: &Value,
    mut on_entry: F,
) -> Result<(Vec<NewRecord>, NormalizeStats)>
where
    F: FnMut(),
{
    let Value::Array(entries) = root else {
        return Err(Error::InvalidInput(format!(
            "expected a JSON array at the top level, found {}",
            json_kind(root)
        )));
    };

    let mut stats = NormalizeStats::default();
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Value::Object(obj) = entry else {
            return Err(Error::InvalidInput(format!(
                "element {index} is {}, expected an object",
                json_kind(entry)
            )));
        };
        records.push(normalize_entry(obj, &mut stats));
        on_entry();
    }

    debug!(
        records = stats.records,
        swot_derived = stats.swot_derived,
        coerced_nulls = stats.coerced_nulls,
        "Normalized document"
    );
    Ok((records, stats))
}

/// Parses and normalizes a JSON document.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the text is not valid JSON or not an
/// array of objects.
pub fn parse_document(json: &str) -> Result<(Vec<NewRecord>, NormalizeStats)> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| Error::InvalidInput(format!("failed to parse JSON: {e}")))?;
    normalize_document(&root)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
