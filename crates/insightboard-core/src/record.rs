//! Analytical record model.
//!
//! A [`Record`] is one row of the `records` table. Every attribute except the
//! id is nullable; absence is a valid state, not a data error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::FilterColumn;

/// SWOT classification derived from a record's insight or title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Swot {
    /// "strength" keyword.
    Strength,
    /// "weakness" keyword.
    Weakness,
    /// "opportunit" keyword (opportunity, opportunities).
    Opportunity,
    /// "threat" keyword.
    Threat,
}

impl Swot {
    /// All classifications, in keyword priority order.
    pub const ALL: [Swot; 4] = [
        Swot::Strength,
        Swot::Weakness,
        Swot::Opportunity,
        Swot::Threat,
    ];

    /// Stored and serialized name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Weakness => "Weakness",
            Self::Opportunity => "Opportunity",
            Self::Threat => "Threat",
        }
    }

    /// Lowercase keyword searched for in free text.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Weakness => "weakness",
            Self::Opportunity => "opportunit",
            Self::Threat => "threat",
        }
    }
}

impl fmt::Display for Swot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Swot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Swot::ALL
            .into_iter()
            .find(|swot| swot.as_str() == s)
            .ok_or_else(|| format!("unknown SWOT value: {s}"))
    }
}

/// A persisted analytical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[allow(missing_docs)]
pub struct Record {
    /// Store-assigned identifier.
    pub id: i64,
    pub end_year: Option<String>,
    pub intensity: Option<i64>,
    pub sector: Option<String>,
    pub topic: Option<String>,
    pub insight: Option<String>,
    pub url: Option<String>,
    pub region: Option<String>,
    pub start_year: Option<String>,
    pub impact: Option<i64>,
    /// Text timestamp, kept as delivered by the source.
    pub added: Option<String>,
    /// Text timestamp, kept as delivered by the source.
    pub published: Option<String>,
    pub country: Option<String>,
    pub relevance: Option<i64>,
    pub pestle: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub likelihood: Option<i64>,
    pub city: Option<String>,
    pub swot: Option<Swot>,
}

impl Record {
    /// Returns the value of a filterable column.
    #[must_use]
    pub fn get(&self, column: FilterColumn) -> Option<&str> {
        match column {
            FilterColumn::Topic => self.topic.as_deref(),
            FilterColumn::EndYear => self.end_year.as_deref(),
            FilterColumn::Sector => self.sector.as_deref(),
            FilterColumn::Region => self.region.as_deref(),
            FilterColumn::Pestle => self.pestle.as_deref(),
            FilterColumn::Source => self.source.as_deref(),
            FilterColumn::Country => self.country.as_deref(),
            FilterColumn::City => self.city.as_deref(),
            FilterColumn::Swot => self.swot.map(Swot::as_str),
        }
    }

    /// Drops the id, yielding the row as it would be staged for insertion.
    #[must_use]
    pub fn into_new(self) -> NewRecord {
        NewRecord {
            end_year: self.end_year,
            intensity: self.intensity,
            sector: self.sector,
            topic: self.topic,
            insight: self.insight,
            url: self.url,
            region: self.region,
            start_year: self.start_year,
            impact: self.impact,
            added: self.added,
            published: self.published,
            country: self.country,
            relevance: self.relevance,
            pestle: self.pestle,
            source: self.source,
            title: self.title,
            likelihood: self.likelihood,
            city: self.city,
            swot: self.swot,
        }
    }
}

/// A normalized record awaiting insertion (no id yet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NewRecord {
    pub end_year: Option<String>,
    pub intensity: Option<i64>,
    pub sector: Option<String>,
    pub topic: Option<String>,
    pub insight: Option<String>,
    pub url: Option<String>,
    pub region: Option<String>,
    pub start_year: Option<String>,
    pub impact: Option<i64>,
    pub added: Option<String>,
    pub published: Option<String>,
    pub country: Option<String>,
    pub relevance: Option<i64>,
    pub pestle: Option<String>,
    pub source: Option<String>,
    pub title: Option<String>,
    pub likelihood: Option<i64>,
    pub city: Option<String>,
    pub swot: Option<Swot>,
}
