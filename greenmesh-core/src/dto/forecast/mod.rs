//! Generation forecast DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blank_as_none;

/// One forecast point written by a forecasting job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenForecastWrite {
    pub asset_id: i64,
    pub forecast_issue_ts: DateTime<Utc>,
    pub ts: DateTime<Utc>,
    pub p_kw_pred: Option<Decimal>,
    pub p10: Option<Decimal>,
    pub p90: Option<Decimal>,
    pub model_version: Option<String>,
    pub scenario: Option<String>,
}

/// `GET /api/forecast/gen` parameters
///
/// Without `issue_ts` every forecast run overlapping the range is returned.
/// A blank `issueTs=` counts as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenForecastQuery {
    pub asset_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_ts: Option<DateTime<Utc>>,
}
