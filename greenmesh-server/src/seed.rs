//! Dev Demo Data Seeder
//!
//! Fills an empty database with one park, a PV inverter and a battery, their
//! meter points, recent measurements, a forecast and a running dispatch plan.
//! Every step looks up its natural key first, so running it again is a no-op.

use chrono::{DateTime, Duration, Utc};
use greenmesh_core::domain::park::DEFAULT_PARK_TIMEZONE;
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, CreateDispatchPlanDetail};
use greenmesh_core::dto::forecast::GenForecastWrite;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::repository::{
    asset_repository, dispatch_repository, energy_type_repository, forecast_repository,
    meter_point_repository, park_repository, timeseries_repository,
};
use crate::repository::asset::NewAsset;
use crate::repository::meter_point::NewMeterPoint;

pub const DEMO_PARK_NAME: &str = "Demo Park";
pub const DEMO_PV_NAME: &str = "PV Inverter 1#";
pub const DEMO_BESS_NAME: &str = "BESS Group 1#";

const ENERGY_TYPE: &str = "ELEC";

/// Ids of the rows the seeder made sure exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoIds {
    pub park_id: i64,
    pub pv_asset_id: i64,
    pub bess_asset_id: i64,
    pub pv_point_id: i64,
    pub bess_point_id: i64,
}

/// Seed the demo data set, inserting only what is missing
pub async fn seed_demo_data(pool: &PgPool) -> Result<DemoIds, sqlx::Error> {
    tracing::info!("Seeding demo data (parks/assets/points/timeseries/forecast/dispatch)...");

    energy_type_repository::create(pool, ENERGY_TYPE, "Electricity", "power").await?;

    let park_id = ensure_park(pool).await?;
    let pv_asset_id = ensure_asset(pool, park_id, "PV", DEMO_PV_NAME, 2800).await?;
    let bess_asset_id = ensure_asset(pool, park_id, "BESS", DEMO_BESS_NAME, 5000).await?;

    let pv_point_id = ensure_meter_point(pool, park_id, pv_asset_id, "ACTIVE_POWER", "kW").await?;
    let bess_point_id = ensure_meter_point(pool, park_id, bess_asset_id, "SOC", "%").await?;

    let now = Utc::now();
    ensure_measurements(pool, pv_point_id, 1250, now).await?;
    ensure_measurements(pool, bess_point_id, 68, now).await?;

    if forecast_repository::count_by_asset(pool, pv_asset_id).await? == 0 {
        let points = demo_forecast(pv_asset_id, 1850, now);
        forecast_repository::insert_batch(pool, &points).await?;
        tracing::debug!("Seeded {} forecast points", points.len());
    }

    if !dispatch_repository::any_exists(pool).await? {
        let plan = demo_plan(park_id, pv_asset_id, bess_asset_id, now);
        let plan_id = dispatch_repository::create_with_details(pool, &plan, "RUNNING").await?;
        tracing::debug!("Seeded dispatch plan {}", plan_id);
    }

    tracing::info!("Demo data ready (park {})", park_id);

    Ok(DemoIds {
        park_id,
        pv_asset_id,
        bess_asset_id,
        pv_point_id,
        bess_point_id,
    })
}

async fn ensure_park(pool: &PgPool) -> Result<i64, sqlx::Error> {
    if let Some(id) = park_repository::find_id_by_name(pool, DEMO_PARK_NAME).await? {
        return Ok(id);
    }

    let park = park_repository::create(
        pool,
        DEMO_PARK_NAME,
        Some("East China"),
        DEFAULT_PARK_TIMEZONE,
        None,
    )
    .await?;
    Ok(park.id)
}

async fn ensure_asset(
    pool: &PgPool,
    park_id: i64,
    asset_type: &str,
    name: &str,
    rated_capacity: i64,
) -> Result<i64, sqlx::Error> {
    if let Some(id) = asset_repository::find_id_by_name(pool, name).await? {
        return Ok(id);
    }

    let asset = NewAsset {
        park_id,
        asset_type,
        name,
        rated_capacity: Some(Decimal::from(rated_capacity)),
        status: Some("RUNNING"),
    };
    asset_repository::create(pool, &asset).await
}

async fn ensure_meter_point(
    pool: &PgPool,
    park_id: i64,
    asset_id: i64,
    meas_type: &str,
    unit: &str,
) -> Result<i64, sqlx::Error> {
    if let Some(id) = meter_point_repository::find_id_by_asset(pool, asset_id, meas_type).await? {
        return Ok(id);
    }

    let point = NewMeterPoint {
        park_id,
        asset_id: Some(asset_id),
        energy_type: ENERGY_TYPE,
        meas_type,
        unit,
        sampling_interval_sec: 60,
        protocol: "IEC104",
        tag_address: format!("P{}", asset_id),
        is_critical: false,
    };
    meter_point_repository::create(pool, &point).await
}

async fn ensure_measurements(
    pool: &PgPool,
    point_id: i64,
    base: i64,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    if timeseries_repository::count_by_point(pool, point_id).await? > 0 {
        return Ok(());
    }

    let samples = demo_measurements(point_id, base, now);
    timeseries_repository::insert_measurements(pool, &samples).await?;
    tracing::debug!("Seeded {} measurements for point {}", samples.len(), point_id);
    Ok(())
}

// =============================================================================
// Demo Series
// =============================================================================

/// Nine samples, 10 minutes apart, from 20 minutes ago to an hour ahead
pub fn demo_measurements(point_id: i64, base: i64, now: DateTime<Utc>) -> Vec<Measurement> {
    (-2..=6)
        .map(|i: i64| Measurement {
            point_id,
            ts: now + Duration::minutes(10 * i),
            value: Some(Decimal::from(base + 5 * i)),
            quality_flag: Some("GOOD".to_string()),
            agg_level: Some("raw".to_string()),
        })
        .collect()
}

/// Thirteen quarter-hour points around `issue`, with a ±10% band
pub fn demo_forecast(asset_id: i64, base: i64, issue: DateTime<Utc>) -> Vec<GenForecastWrite> {
    (-4..=8)
        .map(|i: i64| {
            let value = Decimal::from(base + 30 * i);
            GenForecastWrite {
                asset_id,
                forecast_issue_ts: issue,
                ts: issue + Duration::minutes(15 * i),
                p_kw_pred: Some(value),
                p10: Some(value * Decimal::new(9, 1)),
                p90: Some(value * Decimal::new(11, 1)),
                model_version: Some("demo-0.1".to_string()),
                scenario: Some("base".to_string()),
            }
        })
        .collect()
}

/// One-hour plan starting in 15 minutes, four steps for PV and battery
pub fn demo_plan(park_id: i64, pv_asset_id: i64, bess_asset_id: i64, now: DateTime<Utc>) -> CreateDispatchPlan {
    let horizon_start = now + Duration::minutes(15);

    let details = (0..4)
        .flat_map(|i: i64| {
            let ts = horizon_start + Duration::minutes(15 * i);
            [
                CreateDispatchPlanDetail {
                    ts,
                    asset_id: pv_asset_id,
                    p_set_kw: Some(Decimal::from(1600 + 50 * i)),
                    q_set_kvar: None,
                    heat_set_mw: None,
                    soc_target: None,
                },
                CreateDispatchPlanDetail {
                    ts,
                    asset_id: bess_asset_id,
                    p_set_kw: Some(Decimal::from(-500 + 20 * i)),
                    q_set_kvar: None,
                    heat_set_mw: None,
                    soc_target: Some(Decimal::from(70 + 2 * i)),
                },
            ]
        })
        .collect();

    CreateDispatchPlan {
        park_id,
        horizon_start,
        horizon_end: horizon_start + Duration::hours(1),
        interval_min: Some(15),
        strategy_profile_id: None,
        status: Some("RUNNING".to_string()),
        details,
    }
}
