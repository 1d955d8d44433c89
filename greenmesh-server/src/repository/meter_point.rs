//! Meter Point Repository
//!
//! Handles all database operations related to metering/telemetry tags.

use greenmesh_core::domain::asset::MeterPoint;
use greenmesh_core::dto::master_data::MeterPointFilter;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{flag_is_set, flag_value, push_condition};

/// Columns needed to register a meter point
#[derive(Debug, Clone)]
pub struct NewMeterPoint<'a> {
    pub park_id: i64,
    pub asset_id: Option<i64>,
    pub energy_type: &'a str,
    pub meas_type: &'a str,
    pub unit: &'a str,
    pub sampling_interval_sec: i32,
    pub protocol: &'a str,
    pub tag_address: String,
    pub is_critical: bool,
}

/// Insert a meter point and return its generated id
pub async fn create(pool: &PgPool, point: &NewMeterPoint<'_>) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO dim_meter_point (
            asset_id, park_id, energy_type, meas_type, unit,
            sampling_interval_s, protocol, tag_address, is_critical
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING point_id
        "#,
    )
    .bind(point.asset_id)
    .bind(point.park_id)
    .bind(point.energy_type)
    .bind(point.meas_type)
    .bind(point.unit)
    .bind(point.sampling_interval_sec)
    .bind(point.protocol)
    .bind(&point.tag_address)
    .bind(flag_value(point.is_critical))
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Find the meter point measuring `meas_type` on an asset
pub async fn find_id_by_asset(
    pool: &PgPool,
    asset_id: i64,
    meas_type: &str,
) -> Result<Option<i64>, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        r#"
        SELECT point_id FROM dim_meter_point
        WHERE asset_id = $1 AND meas_type = $2
        ORDER BY point_id
        LIMIT 1
        "#,
    )
    .bind(asset_id)
    .bind(meas_type)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

/// List meter points matching every filter that is set
pub async fn list(pool: &PgPool, filter: &MeterPointFilter) -> Result<Vec<MeterPoint>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<MeterPointRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &MeterPointFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT point_id, park_id, ent_id, asset_id, energy_type, meas_type, unit, \
         sampling_interval_s, protocol, tag_address, is_critical FROM dim_meter_point",
    );
    let mut has_where = false;

    if let Some(park_id) = filter.park_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("park_id = ").push_bind(park_id);
    }

    if let Some(asset_id) = filter.asset_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("asset_id = ").push_bind(asset_id);
    }

    if let Some(ent_id) = filter.ent_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("ent_id = ").push_bind(ent_id);
    }

    if let Some(energy_type) = &filter.energy_type {
        push_condition(&mut qb, &mut has_where);
        qb.push("energy_type = ").push_bind(energy_type.clone());
    }

    qb.push(" ORDER BY point_id");
    qb
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct MeterPointRow {
    point_id: i64,
    park_id: i64,
    ent_id: Option<i64>,
    asset_id: Option<i64>,
    energy_type: Option<String>,
    meas_type: Option<String>,
    unit: Option<String>,
    sampling_interval_s: Option<i32>,
    protocol: Option<String>,
    tag_address: Option<String>,
    is_critical: Option<String>,
}

impl From<MeterPointRow> for MeterPoint {
    fn from(row: MeterPointRow) -> Self {
        MeterPoint {
            id: row.point_id,
            park_id: row.park_id,
            ent_id: row.ent_id,
            asset_id: row.asset_id,
            energy_type: row.energy_type,
            meas_type: row.meas_type,
            unit: row.unit,
            sampling_interval_sec: row.sampling_interval_s,
            protocol: row.protocol,
            tag_address: row.tag_address,
            is_critical: flag_is_set(row.is_critical.as_deref()),
        }
    }
}
