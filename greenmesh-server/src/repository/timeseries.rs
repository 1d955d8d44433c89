//! Time-series Repository
//!
//! Handles raw sample ingestion (`raw_timeseries`) and reads of the cleaned
//! measurement store (`ts_measurement`).

use chrono::{DateTime, Utc};
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::timeseries::RawPointValue;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::INSERT_CHUNK_SIZE;

/// Insert raw samples in multi-row chunks, returning the number of rows written
pub async fn insert_raw_batch(pool: &PgPool, values: &[RawPointValue]) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in values.chunks(INSERT_CHUNK_SIZE) {
        let mut qb = raw_insert_query(chunk);
        inserted += qb.build().execute(pool).await?.rows_affected();
    }

    Ok(inserted)
}

fn raw_insert_query(chunk: &[RawPointValue]) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(
        "INSERT INTO raw_timeseries (point_id, ts, value, quality_flag, source_system) ",
    );

    qb.push_values(chunk, |mut row, v| {
        row.push_bind(v.point_id)
            .push_bind(v.ts)
            .push_bind(v.value)
            .push_bind(v.quality_flag.as_deref())
            .push_bind(v.source_system.as_deref());
    });

    qb
}

/// Insert rows directly into the measurement store
pub async fn insert_measurements(
    pool: &PgPool,
    measurements: &[Measurement],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in measurements.chunks(INSERT_CHUNK_SIZE) {
        let mut qb = QueryBuilder::<Postgres>::new(
            "INSERT INTO ts_measurement (point_id, ts, value, quality_flag, agg_level) ",
        );
        qb.push_values(chunk, |mut row, m| {
            row.push_bind(m.point_id)
                .push_bind(m.ts)
                .push_bind(m.value)
                .push_bind(m.quality_flag.as_deref())
                .push_bind(m.agg_level.as_deref());
        });
        inserted += qb.build().execute(pool).await?.rows_affected();
    }

    Ok(inserted)
}

/// Measurements of one point with `start <= ts <= end`, oldest first
pub async fn find_in_range(
    pool: &PgPool,
    point_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<Measurement>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MeasurementRow>(
        r#"
        SELECT point_id, ts, value, quality_flag, agg_level
        FROM ts_measurement
        WHERE point_id = $1
          AND ts BETWEEN $2 AND $3
        ORDER BY ts
        LIMIT $4
        "#,
    )
    .bind(point_id)
    .bind(start)
    .bind(end)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Most recent measurement of each requested point, ordered by point id
pub async fn find_latest(pool: &PgPool, point_ids: &[i64]) -> Result<Vec<Measurement>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MeasurementRow>(
        r#"
        SELECT DISTINCT ON (point_id) point_id, ts, value, quality_flag, agg_level
        FROM ts_measurement
        WHERE point_id = ANY($1)
        ORDER BY point_id, ts DESC, id DESC
        "#,
    )
    .bind(point_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// Get measurement count for a point
pub async fn count_by_point(pool: &PgPool, point_id: i64) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ts_measurement WHERE point_id = $1")
        .bind(point_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct MeasurementRow {
    point_id: i64,
    ts: DateTime<Utc>,
    value: Option<Decimal>,
    quality_flag: Option<String>,
    agg_level: Option<String>,
}

impl From<MeasurementRow> for Measurement {
    fn from(row: MeasurementRow) -> Self {
        Measurement {
            point_id: row.point_id,
            ts: row.ts,
            value: row.value,
            quality_flag: row.quality_flag,
            agg_level: row.agg_level,
        }
    }
}
