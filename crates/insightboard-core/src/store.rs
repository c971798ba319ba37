//! SQLite-backed record store.
//!
//! The store owns a single `records` table. It is replaced wholesale by the
//! loader and otherwise only read. All SQL identifiers come from the static
//! column enums in this crate; values are always bound parameters.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::filter::{FilterColumn, RecordFilter};
use crate::record::{NewRecord, Record};

/// Rows per multi-row INSERT. 19 binds per row keeps a chunk well under
/// SQLite's host parameter limit.
const INSERT_CHUNK_SIZE: usize = 500;

const CREATE_RECORDS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS records (
    id          INTEGER PRIMARY KEY,
    end_year    TEXT,
    intensity   INTEGER,
    sector      TEXT,
    topic       TEXT,
    insight     TEXT,
    url         TEXT,
    region      TEXT,
    start_year  TEXT,
    impact      INTEGER,
    added       TEXT,
    published   TEXT,
    country     TEXT,
    relevance   INTEGER,
    pestle      TEXT,
    source      TEXT,
    title       TEXT,
    likelihood  INTEGER,
    city        TEXT,
    swot        TEXT CHECK (swot IS NULL OR swot IN ('Strength', 'Weakness', 'Opportunity', 'Threat'))
)";

const SELECT_RECORDS: &str = "\
SELECT id, end_year, intensity, sector, topic, insight, url, region, start_year, impact, \
added, published, country, relevance, pestle, source, title, likelihood, city, swot \
FROM records";

const INSERT_RECORDS: &str = "\
INSERT INTO records (end_year, intensity, sector, topic, insight, url, region, start_year, \
impact, added, published, country, relevance, pestle, source, title, likelihood, city, swot) ";

/// Text column used as an aggregation group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    /// `region`
    Region,
    /// `topic`
    Topic,
    /// `country`
    Country,
    /// `end_year`
    EndYear,
}

impl GroupColumn {
    /// SQL identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Topic => "topic",
            Self::Country => "country",
            Self::EndYear => "end_year",
        }
    }
}

/// Integer column that can be averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricColumn {
    /// `intensity`
    Intensity,
    /// `likelihood`
    Likelihood,
    /// `relevance`
    Relevance,
}

impl MetricColumn {
    /// SQL identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intensity => "intensity",
            Self::Likelihood => "likelihood",
            Self::Relevance => "relevance",
        }
    }
}

/// Handle to the record table. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    /// Opens the store described by `config` and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unparseable URL, [`Error::Database`]
    /// if the connection fails and [`Error::Migration`] if the schema cannot
    /// be created.
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| {
                Error::Config(format!(
                    "invalid database_url '{}': {e}",
                    config.database_url
                ))
            })?
            .create_if_missing(config.create_if_missing);

        // Every connection to `sqlite::memory:` is its own database, so an
        // in-memory store must stay on one long-lived connection.
        let in_memory = config.database_url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        info!(url = %config.database_url, "Opened record store");
        Self::from_pool(pool).await
    }

    /// Opens a store at `database_url` with default pool settings.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::open`].
    pub async fn connect(database_url: &str) -> Result<Self> {
        let config = StorageConfig {
            database_url: database_url.to_string(),
            ..StorageConfig::default()
        };
        Self::open(&config).await
    }

    /// Wraps an existing pool and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Migration`] if the schema cannot be created.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_RECORDS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;
        Ok(())
    }

    /// Underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns every record matching all conditions of `filter`, in
    /// store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the query fails.
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<Record>> {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_RECORDS);
        let mut separator = " WHERE ";
        for (column, value) in filter.conditions() {
            builder
                .push(separator)
                .push(column.name())
                .push(" = ")
                .push_bind(value.to_string());
            separator = " AND ";
        }

        let records = builder
            .build_query_as::<Record>()
            .fetch_all(&self.pool)
            .await?;
        debug!(
            conditions = filter.len(),
            rows = records.len(),
            "Listed records"
        );
        Ok(records)
    }

    /// Distinct non-null, non-empty values of one column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the query fails.
    pub async fn distinct_values(&self, column: FilterColumn) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT DISTINCT {col} FROM records WHERE {col} IS NOT NULL AND {col} <> ''",
            col = column.name()
        );
        let values: Vec<String> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;
        Ok(values)
    }

    /// Average of `metric` per `group`, skipping null/empty keys and null
    /// metrics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the query fails.
    pub async fn group_average(
        &self,
        group: GroupColumn,
        metric: MetricColumn,
    ) -> Result<Vec<(String, f64)>> {
        let sql = format!(
            "SELECT {g}, AVG({m}) FROM records \
             WHERE {g} IS NOT NULL AND {g} <> '' AND {m} IS NOT NULL \
             GROUP BY {g}",
            g = group.name(),
            m = metric.name()
        );
        let rows: Vec<(String, f64)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Row count per `group`, skipping null/empty keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the query fails.
    pub async fn group_count(&self, group: GroupColumn) -> Result<Vec<(String, i64)>> {
        let sql = format!(
            "SELECT {g}, COUNT(*) FROM records WHERE {g} IS NOT NULL AND {g} <> '' GROUP BY {g}",
            g = group.name()
        );
        let rows: Vec<(String, i64)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Total number of records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the query fails.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Replaces the whole table with `records` in a single transaction.
    ///
    /// Rows are inserted in input order. If any statement fails the
    /// transaction is rolled back on drop and the previous contents remain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if any statement or the commit fails.
    pub async fn replace_all(&self, records: &[NewRecord]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM records")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let mut inserted = 0;
        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            let mut builder = QueryBuilder::<Sqlite>::new(INSERT_RECORDS);
            builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.end_year.clone())
                    .push_bind(record.intensity)
                    .push_bind(record.sector.clone())
                    .push_bind(record.topic.clone())
                    .push_bind(record.insight.clone())
                    .push_bind(record.url.clone())
                    .push_bind(record.region.clone())
                    .push_bind(record.start_year.clone())
                    .push_bind(record.impact)
                    .push_bind(record.added.clone())
                    .push_bind(record.published.clone())
                    .push_bind(record.country.clone())
                    .push_bind(record.relevance)
                    .push_bind(record.pestle.clone())
                    .push_bind(record.source.clone())
                    .push_bind(record.title.clone())
                    .push_bind(record.likelihood)
                    .push_bind(record.city.clone())
                    .push_bind(record.swot);
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        info!(deleted, inserted, "Replaced record set");
        Ok(inserted)
    }
}
