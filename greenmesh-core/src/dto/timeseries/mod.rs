//! Time-series DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::blank_as_none;

/// One raw sample pushed by a collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPointValue {
    pub point_id: i64,
    pub ts: DateTime<Utc>,
    pub value: Option<Decimal>,
    pub quality_flag: Option<String>,
    pub source_system: Option<String>,
}

/// `GET /api/timeseries/measurements` parameters
///
/// The range is inclusive on both ends. `limit` defaults to
/// [`DEFAULT_MEASUREMENT_LIMIT`] when absent or blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementQuery {
    pub point_id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<i64>,
}

/// Row cap applied to measurement range queries without an explicit limit
pub const DEFAULT_MEASUREMENT_LIMIT: i64 = 5000;

/// `GET /api/timeseries/latest` parameters
///
/// `point_ids` is a comma-separated id list, e.g. `"12,13,20"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestQuery {
    #[serde(default)]
    pub point_ids: String,
}

impl LatestQuery {
    pub fn from_ids(ids: &[i64]) -> Self {
        let point_ids = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        Self { point_ids }
    }
}
