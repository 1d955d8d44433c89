//! Forecast API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use greenmesh_core::domain::forecast::GenForecastPoint;
use greenmesh_core::dto::InsertedCount;
use greenmesh_core::dto::forecast::{GenForecastQuery, GenForecastWrite};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::forecast_service::{self, ForecastError};

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::ValidationError(msg) => ApiError::BadRequest(msg),
            ForecastError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

/// POST /api/forecast/gen/batch
pub async fn save_generation_forecast(
    State(pool): State<PgPool>,
    Json(points): Json<Vec<GenForecastWrite>>,
) -> ApiResult<Json<InsertedCount>> {
    tracing::info!("Received {} forecast points", points.len());

    let inserted = forecast_service::save_generation_forecast(&pool, points).await?;
    Ok(Json(InsertedCount { inserted }))
}

/// GET /api/forecast/gen?assetId&start&end&issueTs
pub async fn get_generation_forecast(
    State(pool): State<PgPool>,
    Query(query): Query<GenForecastQuery>,
) -> ApiResult<Json<Vec<GenForecastPoint>>> {
    tracing::debug!("Querying forecast of asset {}", query.asset_id);

    let points = forecast_service::get_generation_forecast(&pool, query).await?;
    Ok(Json(points))
}
