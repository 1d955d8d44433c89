//! Forecast Service

use greenmesh_core::domain::forecast::GenForecastPoint;
use greenmesh_core::dto::forecast::{GenForecastQuery, GenForecastWrite};
use sqlx::PgPool;

use crate::repository::forecast_repository;
use crate::service::timeseries::MAX_BATCH_SIZE;

/// Service error type
#[derive(Debug)]
pub enum ForecastError {
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for ForecastError {
    fn from(err: sqlx::Error) -> Self {
        ForecastError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Store a batch of generation forecast points
pub async fn save_generation_forecast(pool: &PgPool, points: Vec<GenForecastWrite>) -> Result<u64> {
    if points.is_empty() {
        return Ok(0);
    }

    if points.len() > MAX_BATCH_SIZE {
        return Err(ForecastError::ValidationError(format!(
            "batch too large: {} items (max {})",
            points.len(),
            MAX_BATCH_SIZE
        )));
    }

    let inserted = forecast_repository::insert_batch(pool, &points).await?;

    tracing::info!("Saved {} forecast points", inserted);

    Ok(inserted)
}

/// Forecast points of one asset, optionally pinned to a single issue time
pub async fn get_generation_forecast(
    pool: &PgPool,
    query: GenForecastQuery,
) -> Result<Vec<GenForecastPoint>> {
    validate_range(&query)?;

    Ok(forecast_repository::find(pool, &query).await?)
}

fn validate_range(query: &GenForecastQuery) -> Result<()> {
    if query.start > query.end {
        return Err(ForecastError::ValidationError(
            "start must not be after end".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_validate_range() {
        let now = Utc::now();
        let mut query = GenForecastQuery {
            asset_id: 1,
            start: now,
            end: now + Duration::hours(2),
            issue_ts: None,
        };
        assert!(validate_range(&query).is_ok());

        query.end = now - Duration::minutes(1);
        assert!(matches!(
            validate_range(&query),
            Err(ForecastError::ValidationError(_))
        ));
    }
}
