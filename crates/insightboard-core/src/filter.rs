//! Equality filters over the whitelisted record columns.
//!
//! Filters arrive as loose `(key, value)` pairs (usually a query string).
//! Building a [`RecordFilter`] keeps only the pairs that can constrain the
//! result:
//!
//! - the key must name one of the nine [`FilterColumn`]s,
//! - the value must be non-empty and not the `"All"` sentinel,
//! - when a key repeats, the first occurrence wins.
//!
//! Everything else is dropped silently.
//!
//! ```rust,ignore
//! use insightboard_core::filter::{FilterColumn, RecordFilter};
//!
//! let filter = RecordFilter::from_pairs([("topic", "oil"), ("region", "All"), ("page", "2")]);
//! assert_eq!(filter.len(), 1);
//! assert_eq!(filter.value(FilterColumn::Topic), Some("oil"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Record;

/// Value meaning "no constraint" in a filter pair.
pub const ALL_SENTINEL: &str = "All";

/// A column that can be filtered on and enumerated for filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterColumn {
    /// `topic`
    Topic,
    /// `end_year`
    EndYear,
    /// `sector`
    Sector,
    /// `region`
    Region,
    /// `pestle`
    Pestle,
    /// `source`
    Source,
    /// `country`
    Country,
    /// `city`
    City,
    /// `swot`
    Swot,
}

impl FilterColumn {
    /// Every filterable column.
    pub const ALL: [FilterColumn; 9] = [
        FilterColumn::Topic,
        FilterColumn::EndYear,
        FilterColumn::Sector,
        FilterColumn::Region,
        FilterColumn::Pestle,
        FilterColumn::Source,
        FilterColumn::Country,
        FilterColumn::City,
        FilterColumn::Swot,
    ];

    /// Column name, used both as the filter key and the SQL identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::EndYear => "end_year",
            Self::Sector => "sector",
            Self::Region => "region",
            Self::Pestle => "pestle",
            Self::Source => "source",
            Self::Country => "country",
            Self::City => "city",
            Self::Swot => "swot",
        }
    }

    /// Resolves a filter key. Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == key)
    }
}

impl fmt::Display for FilterColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A conjunction of exact-match column constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    conditions: Vec<(FilterColumn, String)>,
}

impl RecordFilter {
    /// Creates a filter matching every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from loose key/value pairs, dropping ignorable ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::new();
        let mut seen: Vec<FilterColumn> = Vec::with_capacity(FilterColumn::ALL.len());
        for (key, value) in pairs {
            let Some(column) = FilterColumn::from_key(key.as_ref()) else {
                continue;
            };
            // First occurrence decides, even when it is an ignorable value.
            if seen.contains(&column) {
                continue;
            }
            seen.push(column);
            filter = filter.with(column, value.as_ref());
        }
        filter
    }

    /// Adds a constraint unless the value is empty or the `"All"` sentinel.
    #[must_use]
    pub fn with(mut self, column: FilterColumn, value: &str) -> Self {
        if value.is_empty() || value == ALL_SENTINEL {
            return self;
        }
        if let Some(existing) = self.conditions.iter_mut().find(|(c, _)| *c == column) {
            existing.1 = value.to_string();
        } else {
            self.conditions.push((column, value.to_string()));
        }
        self
    }

    /// Returns the constrained value for a column, if any.
    #[must_use]
    pub fn value(&self, column: FilterColumn) -> Option<&str> {
        self.conditions
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the active constraints.
    pub fn conditions(&self) -> impl Iterator<Item = (FilterColumn, &str)> {
        self.conditions.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Number of active constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True when the filter matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates the filter against an in-memory record.
    ///
    /// Agrees with the SQL the store generates: a null column never matches.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.conditions
            .iter()
            .all(|(column, value)| record.get(*column) == Some(value.as_str()))
    }
}
