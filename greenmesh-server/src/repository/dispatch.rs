//! Dispatch Plan Repository
//!
//! Plan headers live in `dispatch_plan`, their setpoints in
//! `dispatch_plan_detail`. A plan and its details are always written in a
//! single transaction.

use chrono::{DateTime, Utc};
use greenmesh_core::domain::dispatch::{DispatchPlan, DispatchPlanDetail};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, CreateDispatchPlanDetail, DispatchPlanFilter};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{INSERT_CHUNK_SIZE, push_condition};

const PLAN_COLUMNS: &str = "plan_id, park_id, horizon_start, horizon_end, interval_min, \
                            strategy_profile_id, status, created_ts";

/// Insert a plan header and all of its details, returning the new plan id
///
/// Nothing is persisted if any detail row fails.
pub async fn create_with_details(
    pool: &PgPool,
    req: &CreateDispatchPlan,
    status: &str,
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (plan_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO dispatch_plan (park_id, horizon_start, horizon_end, interval_min, strategy_profile_id, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING plan_id
        "#,
    )
    .bind(req.park_id)
    .bind(req.horizon_start)
    .bind(req.horizon_end)
    .bind(req.interval_min)
    .bind(req.strategy_profile_id)
    .bind(status)
    .fetch_one(&mut *tx)
    .await?;

    for chunk in req.details.chunks(INSERT_CHUNK_SIZE) {
        let mut qb = detail_insert_query(plan_id, chunk);
        qb.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;
    Ok(plan_id)
}

fn detail_insert_query(plan_id: i64, chunk: &[CreateDispatchPlanDetail]) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(
        "INSERT INTO dispatch_plan_detail \
         (plan_id, ts, asset_id, p_set_kw, q_set_kvar, heat_set_mw, soc_target) ",
    );

    qb.push_values(chunk, |mut row, d| {
        row.push_bind(plan_id)
            .push_bind(d.ts)
            .push_bind(d.asset_id)
            .push_bind(d.p_set_kw)
            .push_bind(d.q_set_kvar)
            .push_bind(d.heat_set_mw)
            .push_bind(d.soc_target);
    });

    qb
}

/// Find a plan header by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<DispatchPlan>, sqlx::Error> {
    let row = sqlx::query_as::<_, DispatchPlanRow>(&format!(
        "SELECT {PLAN_COLUMNS} FROM dispatch_plan WHERE plan_id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Details of one plan ordered by `ts`, then `asset_id`
pub async fn find_details(pool: &PgPool, plan_id: i64) -> Result<Vec<DispatchPlanDetail>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DispatchPlanDetailRow>(
        r#"
        SELECT id, plan_id, ts, asset_id, p_set_kw, q_set_kvar, heat_set_mw, soc_target
        FROM dispatch_plan_detail
        WHERE plan_id = $1
        ORDER BY ts, asset_id
        "#,
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// List plan headers, newest first
pub async fn list(pool: &PgPool, filter: &DispatchPlanFilter) -> Result<Vec<DispatchPlan>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<DispatchPlanRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &DispatchPlanFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {PLAN_COLUMNS} FROM dispatch_plan"));
    let mut has_where = false;

    if let Some(park_id) = filter.park_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("park_id = ").push_bind(park_id);
    }

    if let Some(status) = &filter.status {
        push_condition(&mut qb, &mut has_where);
        qb.push("status = ").push_bind(status.clone());
    }

    qb.push(" ORDER BY created_ts DESC, plan_id DESC");
    qb
}

/// Whether at least one plan has been stored
pub async fn any_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM dispatch_plan)")
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct DispatchPlanRow {
    plan_id: i64,
    park_id: i64,
    horizon_start: DateTime<Utc>,
    horizon_end: DateTime<Utc>,
    interval_min: Option<i32>,
    strategy_profile_id: Option<i64>,
    status: String,
    created_ts: DateTime<Utc>,
}

impl From<DispatchPlanRow> for DispatchPlan {
    fn from(row: DispatchPlanRow) -> Self {
        DispatchPlan {
            id: row.plan_id,
            park_id: row.park_id,
            horizon_start: row.horizon_start,
            horizon_end: row.horizon_end,
            interval_min: row.interval_min,
            strategy_profile_id: row.strategy_profile_id,
            status: row.status,
            created_ts: row.created_ts,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DispatchPlanDetailRow {
    id: i64,
    plan_id: i64,
    ts: DateTime<Utc>,
    asset_id: i64,
    p_set_kw: Option<Decimal>,
    q_set_kvar: Option<Decimal>,
    heat_set_mw: Option<Decimal>,
    soc_target: Option<Decimal>,
}

impl From<DispatchPlanDetailRow> for DispatchPlanDetail {
    fn from(row: DispatchPlanDetailRow) -> Self {
        DispatchPlanDetail {
            id: row.id,
            plan_id: row.plan_id,
            ts: row.ts,
            asset_id: row.asset_id,
            p_set_kw: row.p_set_kw,
            q_set_kvar: row.q_set_kvar,
            heat_set_mw: row.heat_set_mw,
            soc_target: row.soc_target,
        }
    }
}
