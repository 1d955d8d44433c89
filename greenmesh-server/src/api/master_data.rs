//! Master Data API Handlers
//!
//! HTTP endpoints for parks, enterprises, assets, meter points, price zones
//! and carbon factors.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use greenmesh_core::domain::asset::{Asset, MeterPoint};
use greenmesh_core::domain::carbon::CarbonFactor;
use greenmesh_core::domain::park::{Enterprise, Park, PriceZone};
use greenmesh_core::dto::master_data::{
    AssetFilter, CarbonFactorFilter, CreatePark, EnterpriseFilter, MeterPointFilter,
    PriceZoneFilter,
};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::master_data_service::{self, MasterDataError};

impl From<MasterDataError> for ApiError {
    fn from(err: MasterDataError) -> Self {
        match err {
            MasterDataError::NotFound(msg) => ApiError::NotFound(msg),
            MasterDataError::ValidationError(msg) => ApiError::BadRequest(msg),
            MasterDataError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

/// GET /api/parks
pub async fn list_parks(State(pool): State<PgPool>) -> ApiResult<Json<Vec<Park>>> {
    tracing::debug!("Listing all parks");

    let parks = master_data_service::list_parks(&pool).await?;
    Ok(Json(parks))
}

/// POST /api/parks
/// Create a new park
pub async fn create_park(
    State(pool): State<PgPool>,
    Json(req): Json<CreatePark>,
) -> ApiResult<Json<Park>> {
    tracing::info!("Creating park: {}", req.name);

    let park = master_data_service::create_park(&pool, req).await?;
    Ok(Json(park))
}

/// GET /api/parks/{id}
pub async fn get_park(State(pool): State<PgPool>, Path(id): Path<i64>) -> ApiResult<Json<Park>> {
    tracing::debug!("Getting park: {}", id);

    let park = master_data_service::get_park(&pool, id).await?;
    Ok(Json(park))
}

/// GET /api/enterprises?parkId
pub async fn list_enterprises(
    State(pool): State<PgPool>,
    Query(filter): Query<EnterpriseFilter>,
) -> ApiResult<Json<Vec<Enterprise>>> {
    tracing::debug!("Listing enterprises: {:?}", filter);

    let enterprises = master_data_service::list_enterprises(&pool, &filter).await?;
    Ok(Json(enterprises))
}

/// GET /api/assets?parkId&entId&assetType
pub async fn list_assets(
    State(pool): State<PgPool>,
    Query(filter): Query<AssetFilter>,
) -> ApiResult<Json<Vec<Asset>>> {
    tracing::debug!("Listing assets: {:?}", filter);

    let assets = master_data_service::list_assets(&pool, &filter).await?;
    Ok(Json(assets))
}

/// GET /api/assets/{id}
pub async fn get_asset(State(pool): State<PgPool>, Path(id): Path<i64>) -> ApiResult<Json<Asset>> {
    tracing::debug!("Getting asset: {}", id);

    let asset = master_data_service::get_asset(&pool, id).await?;
    Ok(Json(asset))
}

/// GET /api/meter-points?parkId&assetId&entId&energyType
pub async fn list_meter_points(
    State(pool): State<PgPool>,
    Query(filter): Query<MeterPointFilter>,
) -> ApiResult<Json<Vec<MeterPoint>>> {
    tracing::debug!("Listing meter points: {:?}", filter);

    let points = master_data_service::list_meter_points(&pool, &filter).await?;
    Ok(Json(points))
}

/// GET /api/price-zones?parkId
pub async fn list_price_zones(
    State(pool): State<PgPool>,
    Query(filter): Query<PriceZoneFilter>,
) -> ApiResult<Json<Vec<PriceZone>>> {
    let zones = master_data_service::list_price_zones(&pool, &filter).await?;
    Ok(Json(zones))
}

/// GET /api/carbon-factors?region&energyType&activeOn
pub async fn list_carbon_factors(
    State(pool): State<PgPool>,
    Query(filter): Query<CarbonFactorFilter>,
) -> ApiResult<Json<Vec<CarbonFactor>>> {
    tracing::debug!("Listing carbon factors: {:?}", filter);

    let factors = master_data_service::list_carbon_factors(&pool, &filter).await?;
    Ok(Json(factors))
}
