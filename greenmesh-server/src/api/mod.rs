//! API Module
//!
//! HTTP API layer for the dashboard backend.
//! Each submodule handles endpoints for a specific domain.

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod forecast;
pub mod health;
pub mod master_data;
pub mod timeseries;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::timeseries::MAX_BATCH_SIZE;

/// Request body cap of the batch endpoints: 1 KiB per item of a full batch
///
/// Must hold the encoded size of a full batch.
pub const BATCH_BODY_LIMIT: usize = MAX_BATCH_SIZE * 1024;

/// Create the main API router with all endpoints
pub fn create_router(pool: PgPool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Master data endpoints
        .route(
            "/api/parks",
            get(master_data::list_parks).post(master_data::create_park),
        )
        .route("/api/parks/{id}", get(master_data::get_park))
        .route("/api/enterprises", get(master_data::list_enterprises))
        .route("/api/assets", get(master_data::list_assets))
        .route("/api/assets/{id}", get(master_data::get_asset))
        .route("/api/meter-points", get(master_data::list_meter_points))
        .route("/api/price-zones", get(master_data::list_price_zones))
        .route("/api/carbon-factors", get(master_data::list_carbon_factors))
        // Time-series endpoints
        .route(
            "/api/timeseries/raw/batch",
            post(timeseries::ingest_raw_batch).layer(DefaultBodyLimit::max(BATCH_BODY_LIMIT)),
        )
        .route(
            "/api/timeseries/measurements",
            get(timeseries::query_measurements),
        )
        .route("/api/timeseries/latest", get(timeseries::query_latest))
        // Forecast endpoints
        .route(
            "/api/forecast/gen/batch",
            post(forecast::save_generation_forecast)
                .layer(DefaultBodyLimit::max(BATCH_BODY_LIMIT)),
        )
        .route("/api/forecast/gen", get(forecast::get_generation_forecast))
        // Dispatch endpoints
        .route(
            "/api/dispatch/plans",
            get(dispatch::list_plans).post(dispatch::create_plan),
        )
        .route("/api/dispatch/plans/{id}", get(dispatch::get_plan))
        // Auth
        .route("/api/auth/login", post(auth::login))
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
