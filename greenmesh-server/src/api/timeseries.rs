//! Time-series API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::InsertedCount;
use greenmesh_core::dto::timeseries::{LatestQuery, MeasurementQuery, RawPointValue};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::timeseries_service::{self, TimeseriesError};

impl From<TimeseriesError> for ApiError {
    fn from(err: TimeseriesError) -> Self {
        match err {
            TimeseriesError::ValidationError(msg) => ApiError::BadRequest(msg),
            TimeseriesError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

/// POST /api/timeseries/raw/batch
/// Store raw collector samples
pub async fn ingest_raw_batch(
    State(pool): State<PgPool>,
    Json(values): Json<Vec<RawPointValue>>,
) -> ApiResult<Json<InsertedCount>> {
    tracing::info!("Received {} raw samples", values.len());

    let inserted = timeseries_service::ingest_raw_batch(&pool, values).await?;
    Ok(Json(InsertedCount { inserted }))
}

/// GET /api/timeseries/measurements?pointId&start&end&limit
pub async fn query_measurements(
    State(pool): State<PgPool>,
    Query(query): Query<MeasurementQuery>,
) -> ApiResult<Json<Vec<Measurement>>> {
    tracing::debug!(
        "Querying measurements of point {} from {} to {}",
        query.point_id,
        query.start,
        query.end
    );

    let measurements = timeseries_service::query_measurements(&pool, query).await?;
    Ok(Json(measurements))
}

/// GET /api/timeseries/latest?pointIds=1,2,3
pub async fn query_latest(
    State(pool): State<PgPool>,
    Query(query): Query<LatestQuery>,
) -> ApiResult<Json<Vec<Measurement>>> {
    tracing::debug!("Querying latest measurements: {}", query.point_ids);

    let latest = timeseries_service::query_latest(&pool, &query.point_ids).await?;
    Ok(Json(latest))
}
