//! Time-series domain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One (possibly aggregated) measurement of a meter point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub point_id: i64,
    pub ts: DateTime<Utc>,
    pub value: Option<Decimal>,
    pub quality_flag: Option<String>,
    pub agg_level: Option<String>,
}
