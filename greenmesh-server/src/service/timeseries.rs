//! Time-series Service
//!
//! Raw ingestion plus range and latest-value reads over measurements.

use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::timeseries::{DEFAULT_MEASUREMENT_LIMIT, MeasurementQuery, RawPointValue};
use sqlx::PgPool;

use crate::repository::timeseries_repository;

/// Largest accepted raw ingest batch
pub const MAX_BATCH_SIZE: usize = 10_000;

/// Largest accepted measurement `limit`
pub const MAX_MEASUREMENT_LIMIT: i64 = 50_000;

/// Service error type
#[derive(Debug)]
pub enum TimeseriesError {
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for TimeseriesError {
    fn from(err: sqlx::Error) -> Self {
        TimeseriesError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, TimeseriesError>;

/// Store raw collector samples, returning the number of inserted rows
pub async fn ingest_raw_batch(pool: &PgPool, values: Vec<RawPointValue>) -> Result<u64> {
    if values.is_empty() {
        return Ok(0);
    }

    validate_batch_size(values.len())?;

    let inserted = timeseries_repository::insert_raw_batch(pool, &values).await?;

    tracing::info!("Ingested {} raw samples", inserted);

    Ok(inserted)
}

/// Measurements of one point in an inclusive time range
pub async fn query_measurements(pool: &PgPool, query: MeasurementQuery) -> Result<Vec<Measurement>> {
    let limit = validate_measurement_query(&query)?;

    let measurements = timeseries_repository::find_in_range(
        pool,
        query.point_id,
        query.start,
        query.end,
        limit,
    )
    .await?;

    Ok(measurements)
}

/// Latest measurement per point for a comma-separated id list
pub async fn query_latest(pool: &PgPool, point_ids: &str) -> Result<Vec<Measurement>> {
    let ids = parse_point_ids(point_ids)?;

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    Ok(timeseries_repository::find_latest(pool, &ids).await?)
}

// =============================================================================
// Validation
// =============================================================================

pub(crate) fn validate_batch_size(len: usize) -> Result<()> {
    if len > MAX_BATCH_SIZE {
        return Err(TimeseriesError::ValidationError(format!(
            "batch too large: {} items (max {})",
            len, MAX_BATCH_SIZE
        )));
    }

    Ok(())
}

/// Returns the effective row limit
fn validate_measurement_query(query: &MeasurementQuery) -> Result<i64> {
    if query.start > query.end {
        return Err(TimeseriesError::ValidationError(
            "start must not be after end".to_string(),
        ));
    }

    let limit = query.limit.unwrap_or(DEFAULT_MEASUREMENT_LIMIT);
    if !(1..=MAX_MEASUREMENT_LIMIT).contains(&limit) {
        return Err(TimeseriesError::ValidationError(format!(
            "limit must be between 1 and {}",
            MAX_MEASUREMENT_LIMIT
        )));
    }

    Ok(limit)
}

/// Parse `"1, 2,,3"` into ids; blank segments are skipped
pub fn parse_point_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                TimeseriesError::ValidationError(format!("invalid point id: {}", s))
            })
        })
        .collect()
}
