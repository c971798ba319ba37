//! Response types for the InsightBoard REST API.
//!
//! Core types stay free of OpenAPI concerns; each DTO here mirrors one of
//! them and converts with `From`.

use insightboard_core::query::{
    CountryRelevance, RegionIntensity, TopicCount, TopicLikelihood, YearIntensity,
};
use insightboard_core::{FilterColumn, FilterValues, Record, VisualizationSummary};
use serde::Serialize;
use utoipa::ToSchema;

// ============================================================================
// Record Types
// ============================================================================

/// A stored record, as returned by `/api/data`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    /// Year the insight is projected to end (text).
    #[schema(example = "2027")]
    pub end_year: Option<String>,
    pub intensity: Option<i64>,
    #[schema(example = "Energy")]
    pub sector: Option<String>,
    #[schema(example = "oil")]
    pub topic: Option<String>,
    pub insight: Option<String>,
    pub url: Option<String>,
    #[schema(example = "Northern America")]
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
    /// One of Strength, Weakness, Opportunity, Threat.
    #[schema(example = "Strength")]
    pub swot: Option<String>,
}

impl From<Record> for RecordResponse {
    fn from(r: Record) -> Self {
        Self {
            id: r.id,
            end_year: r.end_year,
            intensity: r.intensity,
            sector: r.sector,
            topic: r.topic,
            insight: r.insight,
            url: r.url,
            region: r.region,
            start_year: r.start_year,
            impact: r.impact,
            added: r.added,
            published: r.published,
            country: r.country,
            relevance: r.relevance,
            pestle: r.pestle,
            source: r.source,
            title: r.title,
            likelihood: r.likelihood,
            city: r.city,
            swot: r.swot.map(|s| s.to_string()),
        }
    }
}

// ============================================================================
// Filter Types
// ============================================================================

/// Distinct values available for each filter key.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct FilterValuesResponse {
    pub topic: Vec<String>,
    pub end_year: Vec<String>,
    pub sector: Vec<String>,
    pub region: Vec<String>,
    pub pestle: Vec<String>,
    pub source: Vec<String>,
    pub country: Vec<String>,
    pub city: Vec<String>,
    pub swot: Vec<String>,
}

impl From<FilterValues> for FilterValuesResponse {
    fn from(values: FilterValues) -> Self {
        let take = |column| values.get(column).to_vec();
        Self {
            topic: take(FilterColumn::Topic),
            end_year: take(FilterColumn::EndYear),
            sector: take(FilterColumn::Sector),
            region: take(FilterColumn::Region),
            pestle: take(FilterColumn::Pestle),
            source: take(FilterColumn::Source),
            country: take(FilterColumn::Country),
            city: take(FilterColumn::City),
            swot: take(FilterColumn::Swot),
        }
    }
}

// ============================================================================
// Visualization Types
// ============================================================================

/// Average intensity of a region.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegionIntensityItem {
    pub region: String,
    pub avg_intensity: f64,
}

/// Average likelihood of a topic.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicLikelihoodItem {
    pub topic: String,
    pub avg_likelihood: f64,
}

/// Average relevance of a country.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryRelevanceItem {
    pub country: String,
    pub avg_relevance: f64,
}

/// Average intensity of an end year.
#[derive(Debug, Serialize, ToSchema)]
pub struct YearIntensityItem {
    pub year: String,
    pub avg_intensity: f64,
}

/// Record count of a topic.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicCountItem {
    pub topic: String,
    pub count: i64,
}

/// The five dashboard aggregates.
#[derive(Debug, Serialize, ToSchema)]
pub struct VisualizationResponse {
    pub intensity_by_region: Vec<RegionIntensityItem>,
    pub likelihood_by_topic: Vec<TopicLikelihoodItem>,
    pub relevance_by_country: Vec<CountryRelevanceItem>,
    pub intensity_by_year: Vec<YearIntensityItem>,
    pub topic_distribution: Vec<TopicCountItem>,
}

impl From<RegionIntensity> for RegionIntensityItem {
    fn from(v: RegionIntensity) -> Self {
        Self {
            region: v.region,
            avg_intensity: v.avg_intensity,
        }
    }
}

impl From<TopicLikelihood> for TopicLikelihoodItem {
    fn from(v: TopicLikelihood) -> Self {
        Self {
            topic: v.topic,
            avg_likelihood: v.avg_likelihood,
        }
    }
}

impl From<CountryRelevance> for CountryRelevanceItem {
    fn from(v: CountryRelevance) -> Self {
        Self {
            country: v.country,
            avg_relevance: v.avg_relevance,
        }
    }
}

impl From<YearIntensity> for YearIntensityItem {
    fn from(v: YearIntensity) -> Self {
        Self {
            year: v.year,
            avg_intensity: v.avg_intensity,
        }
    }
}

impl From<TopicCount> for TopicCountItem {
    fn from(v: TopicCount) -> Self {
        Self {
            topic: v.topic,
            count: v.count,
        }
    }
}

impl From<VisualizationSummary> for VisualizationResponse {
    fn from(s: VisualizationSummary) -> Self {
        Self {
            intensity_by_region: s.intensity_by_region.into_iter().map(Into::into).collect(),
            likelihood_by_topic: s.likelihood_by_topic.into_iter().map(Into::into).collect(),
            relevance_by_country: s.relevance_by_country.into_iter().map(Into::into).collect(),
            intensity_by_year: s.intensity_by_year.into_iter().map(Into::into).collect(),
            topic_distribution: s.topic_distribution.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Health & Error Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    #[schema(example = "healthy")]
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of stored records; absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<i64>,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}
