//! Dispatch plan domain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status given to plans created without one
pub const DEFAULT_PLAN_STATUS: &str = "DRAFT";

/// Plan header: a time-bounded schedule for the assets of one park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlan {
    pub id: i64,
    pub park_id: i64,
    pub horizon_start: DateTime<Utc>,
    pub horizon_end: DateTime<Utc>,
    pub interval_min: Option<i32>,
    pub strategy_profile_id: Option<i64>,
    pub status: String,
    pub created_ts: DateTime<Utc>,
}

/// One setpoint row of a plan: what an asset should do at `ts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlanDetail {
    pub id: i64,
    pub plan_id: i64,
    pub ts: DateTime<Utc>,
    pub asset_id: i64,
    pub p_set_kw: Option<Decimal>,
    pub q_set_kvar: Option<Decimal>,
    pub heat_set_mw: Option<Decimal>,
    pub soc_target: Option<Decimal>,
}

/// Plan header together with its detail rows, ordered by `ts` then `asset_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchPlanWithDetails {
    pub plan: DispatchPlan,
    pub details: Vec<DispatchPlanDetail>,
}
