//! Read-only query service over the record store.
//!
//! The service holds no state of its own beyond the store handle, so any
//! number of requests may run against it concurrently.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::Result;
use crate::filter::{FilterColumn, RecordFilter};
use crate::record::Record;
use crate::store::{GroupColumn, MetricColumn, RecordStore};

/// Distinct values per filterable column. Every column is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterValues(BTreeMap<FilterColumn, Vec<String>>);

impl FilterValues {
    /// Values for one column (empty if the column has none).
    #[must_use]
    pub fn get(&self, column: FilterColumn) -> &[String] {
        self.0.get(&column).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over `(column, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FilterColumn, &[String])> {
        self.0.iter().map(|(c, v)| (*c, v.as_slice()))
    }
}

/// Average intensity of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct RegionIntensity {
    pub region: String,
    pub avg_intensity: f64,
}

/// Average likelihood of one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct TopicLikelihood {
    pub topic: String,
    pub avg_likelihood: f64,
}

/// Average relevance of one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct CountryRelevance {
    pub country: String,
    pub avg_relevance: f64,
}

/// Average intensity of one end year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct YearIntensity {
    pub year: String,
    pub avg_intensity: f64,
}

/// Number of records on one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct TopicCount {
    pub topic: String,
    pub count: i64,
}

/// The five dashboard aggregates. Each list is unordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct VisualizationSummary {
    pub intensity_by_region: Vec<RegionIntensity>,
    pub likelihood_by_topic: Vec<TopicLikelihood>,
    pub relevance_by_country: Vec<CountryRelevance>,
    pub intensity_by_year: Vec<YearIntensity>,
    pub topic_distribution: Vec<TopicCount>,
}

/// Stateless read operations over a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct QueryService {
    store: RecordStore,
}

impl QueryService {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Lists records matching every active condition of `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn list_records(&self, filter: &RecordFilter) -> Result<Vec<Record>> {
        self.store.list(filter).await
    }

    /// Lists records from loose key/value pairs (see [`RecordFilter::from_pairs`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn list_records_by_pairs<I, K, V>(&self, pairs: I) -> Result<Vec<Record>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let filter = RecordFilter::from_pairs(pairs);
        self.list_records(&filter).await
    }

    /// Distinct non-empty values for each filterable column.
    ///
    /// # Errors
    ///
    /// Returns an error if any store query fails.
    pub async fn list_filter_values(&self) -> Result<FilterValues> {
        let mut values = BTreeMap::new();
        for column in FilterColumn::ALL {
            let distinct = self.store.distinct_values(column).await?;
            debug!(column = %column, values = distinct.len(), "Collected filter values");
            values.insert(column, distinct);
        }
        Ok(FilterValues(values))
    }

    /// Computes the five dashboard aggregates.
    ///
    /// # Errors
    ///
    /// Returns an error if any store query fails; no partial summary is
    /// returned.
    pub async fn visualization_summary(&self) -> Result<VisualizationSummary> {
        let intensity_by_region = self
            .store
            .group_average(GroupColumn::Region, MetricColumn::Intensity)
            .await?
            .into_iter()
            .map(|(region, avg_intensity)| RegionIntensity {
                region,
                avg_intensity,
            })
            .collect();

        let likelihood_by_topic = self
            .store
            .group_average(GroupColumn::Topic, MetricColumn::Likelihood)
            .await?
            .into_iter()
            .map(|(topic, avg_likelihood)| TopicLikelihood {
                topic,
                avg_likelihood,
            })
            .collect();

        let relevance_by_country = self
            .store
            .group_average(GroupColumn::Country, MetricColumn::Relevance)
            .await?
            .into_iter()
            .map(|(country, avg_relevance)| CountryRelevance {
                country,
                avg_relevance,
            })
            .collect();

        let intensity_by_year = self
            .store
            .group_average(GroupColumn::EndYear, MetricColumn::Intensity)
            .await?
            .into_iter()
            .map(|(year, avg_intensity)| YearIntensity {
                year,
                avg_intensity,
            })
            .collect();

        let topic_distribution = self
            .store
            .group_count(GroupColumn::Topic)
            .await?
            .into_iter()
            .map(|(topic, count)| TopicCount { topic, count })
            .collect();

        Ok(VisualizationSummary {
            intensity_by_region,
            likelihood_by_topic,
            relevance_by_country,
            intensity_by_year,
            topic_distribution,
        })
    }
}
