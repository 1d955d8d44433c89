//! Master Data Service
//!
//! Parks, enterprises, assets, meter points, price zones and carbon factors.
//! Apart from park creation these are read-only lookups.

use greenmesh_core::domain::asset::{Asset, MeterPoint};
use greenmesh_core::domain::carbon::CarbonFactor;
use greenmesh_core::domain::park::{DEFAULT_PARK_TIMEZONE, Enterprise, Park, PriceZone};
use greenmesh_core::dto::master_data::{
    AssetFilter, CarbonFactorFilter, CreatePark, EnterpriseFilter, MeterPointFilter,
    PriceZoneFilter,
};
use sqlx::PgPool;

use crate::repository::{
    asset_repository, carbon_factor_repository, enterprise_repository, meter_point_repository,
    park_repository, price_zone_repository,
};

/// Service error type
#[derive(Debug)]
pub enum MasterDataError {
    NotFound(String),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for MasterDataError {
    fn from(err: sqlx::Error) -> Self {
        MasterDataError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, MasterDataError>;

/// Width of `dim_park.name`
pub const MAX_PARK_NAME_CHARS: usize = 255;

// =============================================================================
// Parks
// =============================================================================

/// Create a new park
pub async fn create_park(pool: &PgPool, req: CreatePark) -> Result<Park> {
    validate_park_request(&req)?;

    let timezone = req
        .timezone
        .as_deref()
        .map(str::trim)
        .filter(|tz| !tz.is_empty())
        .unwrap_or(DEFAULT_PARK_TIMEZONE);

    let park = park_repository::create(
        pool,
        req.name.trim(),
        req.region.as_deref(),
        timezone,
        req.boundary_geojson.as_deref(),
    )
    .await?;

    tracing::info!("Park created: {} ({})", park.name, park.id);

    Ok(park)
}

/// Get a park by ID
pub async fn get_park(pool: &PgPool, id: i64) -> Result<Park> {
    park_repository::find_by_id(pool, id)
        .await?
        .ok_or_else(|| MasterDataError::NotFound(format!("Park {} not found", id)))
}

/// List all parks
pub async fn list_parks(pool: &PgPool) -> Result<Vec<Park>> {
    Ok(park_repository::list_all(pool).await?)
}

// =============================================================================
// Lookups
// =============================================================================

pub async fn list_enterprises(pool: &PgPool, filter: &EnterpriseFilter) -> Result<Vec<Enterprise>> {
    Ok(enterprise_repository::list(pool, filter).await?)
}

pub async fn list_assets(pool: &PgPool, filter: &AssetFilter) -> Result<Vec<Asset>> {
    Ok(asset_repository::list(pool, filter).await?)
}

/// Get an asset by ID
pub async fn get_asset(pool: &PgPool, id: i64) -> Result<Asset> {
    asset_repository::find_by_id(pool, id)
        .await?
        .ok_or_else(|| MasterDataError::NotFound(format!("Asset {} not found", id)))
}

pub async fn list_meter_points(pool: &PgPool, filter: &MeterPointFilter) -> Result<Vec<MeterPoint>> {
    Ok(meter_point_repository::list(pool, filter).await?)
}

pub async fn list_price_zones(pool: &PgPool, filter: &PriceZoneFilter) -> Result<Vec<PriceZone>> {
    Ok(price_zone_repository::list(pool, filter).await?)
}

pub async fn list_carbon_factors(
    pool: &PgPool,
    filter: &CarbonFactorFilter,
) -> Result<Vec<CarbonFactor>> {
    Ok(carbon_factor_repository::list(pool, filter).await?)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_park_request(req: &CreatePark) -> Result<()> {
    let name = req.name.trim();

    if name.is_empty() {
        return Err(MasterDataError::ValidationError(
            "Park name cannot be empty".to_string(),
        ));
    }

    // VARCHAR(255) counts characters, not bytes
    if name.chars().count() > MAX_PARK_NAME_CHARS {
        return Err(MasterDataError::ValidationError(
            "Park name is too long (max 255 characters)".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(name: &str) -> CreatePark {
        CreatePark {
            name: name.to_string(),
            region: None,
            timezone: None,
            boundary_geojson: None,
        }
    }

    #[test]
    fn test_validate_blank_name() {
        let result = validate_park_request(&park("   "));
        assert!(matches!(result, Err(MasterDataError::ValidationError(_))));
    }

    #[test]
    fn test_validate_long_name() {
        let result = validate_park_request(&park(&"x".repeat(256)));
        assert!(matches!(result, Err(MasterDataError::ValidationError(_))));
    }

    #[test]
    fn test_validate_multibyte_name_counts_characters() {
        let name = "示例园区".repeat(25);
        assert_eq!(name.chars().count(), 100);
        assert!(name.len() > 255);
        assert!(validate_park_request(&park(&name)).is_ok());

        assert!(validate_park_request(&park(&"园".repeat(255))).is_ok());
        assert!(validate_park_request(&park(&"园".repeat(256))).is_err());
    }

    #[test]
    fn test_validate_length_ignores_surrounding_whitespace() {
        let name = format!("  {}  ", "x".repeat(255));
        assert!(validate_park_request(&park(&name)).is_ok());
    }

    #[test]
    fn test_validate_valid_park() {
        assert!(validate_park_request(&park("Demo Park")).is_ok());
    }
}
