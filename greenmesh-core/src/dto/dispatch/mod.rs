//! Dispatch plan DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blank_as_none;

/// Request to create a plan header together with its detail rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDispatchPlan {
    pub park_id: i64,
    pub horizon_start: DateTime<Utc>,
    pub horizon_end: DateTime<Utc>,
    pub interval_min: Option<i32>,
    pub strategy_profile_id: Option<i64>,
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<CreateDispatchPlanDetail>,
}

/// One setpoint row of a new plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDispatchPlanDetail {
    pub ts: DateTime<Utc>,
    pub asset_id: i64,
    pub p_set_kw: Option<Decimal>,
    pub q_set_kvar: Option<Decimal>,
    pub heat_set_mw: Option<Decimal>,
    pub soc_target: Option<Decimal>,
}

/// `GET /api/dispatch/plans` filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPlanFilter {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub park_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
}
