//! Forecast Repository
//!
//! Handles all database operations related to generation forecasts.

use chrono::{DateTime, Utc};
use greenmesh_core::domain::forecast::GenForecastPoint;
use greenmesh_core::dto::forecast::{GenForecastQuery, GenForecastWrite};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::INSERT_CHUNK_SIZE;

/// Insert forecast points in multi-row chunks, returning the number of rows written
pub async fn insert_batch(pool: &PgPool, points: &[GenForecastWrite]) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for chunk in points.chunks(INSERT_CHUNK_SIZE) {
        let mut qb = QueryBuilder::<Postgres>::new(
            "INSERT INTO gen_forecast \
             (asset_id, forecast_issue_ts, ts, p_kw_pred, p10, p90, model_version, scenario) ",
        );
        qb.push_values(chunk, |mut row, p| {
            row.push_bind(p.asset_id)
                .push_bind(p.forecast_issue_ts)
                .push_bind(p.ts)
                .push_bind(p.p_kw_pred)
                .push_bind(p.p10)
                .push_bind(p.p90)
                .push_bind(p.model_version.as_deref())
                .push_bind(p.scenario.as_deref());
        });
        inserted += qb.build().execute(pool).await?.rows_affected();
    }

    Ok(inserted)
}

/// Forecast points of one asset inside the range, ordered by target time
pub async fn find(pool: &PgPool, query: &GenForecastQuery) -> Result<Vec<GenForecastPoint>, sqlx::Error> {
    let mut qb = find_query(query);
    let rows = qb.build_query_as::<GenForecastRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn find_query(query: &GenForecastQuery) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT asset_id, forecast_issue_ts, ts, p_kw_pred, p10, p90, model_version, scenario \
         FROM gen_forecast WHERE asset_id = ",
    );
    qb.push_bind(query.asset_id)
        .push(" AND ts BETWEEN ")
        .push_bind(query.start)
        .push(" AND ")
        .push_bind(query.end);

    if let Some(issue_ts) = query.issue_ts {
        qb.push(" AND forecast_issue_ts = ").push_bind(issue_ts);
    }

    qb.push(" ORDER BY ts");
    qb
}

/// Get forecast point count for an asset
pub async fn count_by_asset(pool: &PgPool, asset_id: i64) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gen_forecast WHERE asset_id = $1")
        .bind(asset_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct GenForecastRow {
    asset_id: i64,
    forecast_issue_ts: DateTime<Utc>,
    ts: DateTime<Utc>,
    p_kw_pred: Option<Decimal>,
    p10: Option<Decimal>,
    p90: Option<Decimal>,
    model_version: Option<String>,
    scenario: Option<String>,
}

impl From<GenForecastRow> for GenForecastPoint {
    fn from(row: GenForecastRow) -> Self {
        GenForecastPoint {
            asset_id: row.asset_id,
            forecast_issue_ts: row.forecast_issue_ts,
            ts: row.ts,
            p_kw_pred: row.p_kw_pred,
            p10: row.p10,
            p90: row.p90,
            model_version: row.model_version,
            scenario: row.scenario,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(issue_ts: Option<DateTime<Utc>>) -> GenForecastQuery {
        GenForecastQuery {
            asset_id: 1,
            start: "2024-05-01T00:00:00Z".parse().unwrap(),
            end: "2024-05-02T00:00:00Z".parse().unwrap(),
            issue_ts,
        }
    }

    #[test]
    fn test_find_query_without_issue() {
        let qb = find_query(&query(None));
        assert!(
            qb.sql()
                .ends_with("WHERE asset_id = $1 AND ts BETWEEN $2 AND $3 ORDER BY ts")
        );
    }

    #[test]
    fn test_find_query_with_issue() {
        let qb = find_query(&query(Some(Utc::now())));
        assert!(qb.sql().ends_with(
            "WHERE asset_id = $1 AND ts BETWEEN $2 AND $3 AND forecast_issue_ts = $4 ORDER BY ts"
        ));
    }
}
