//! Generation forecast domain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One predicted output value with its uncertainty band
///
/// A forecast run is identified by `(asset_id, forecast_issue_ts)`; each run
/// covers a future horizon of `ts` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenForecastPoint {
    pub asset_id: i64,
    pub forecast_issue_ts: DateTime<Utc>,
    pub ts: DateTime<Utc>,
    pub p_kw_pred: Option<Decimal>,
    pub p10: Option<Decimal>,
    pub p90: Option<Decimal>,
    pub model_version: Option<String>,
    pub scenario: Option<String>,
}
