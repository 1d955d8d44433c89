//! Asset and meter point domain types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An energy asset (PV inverter, battery group, boiler, ...) inside a park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub park_id: i64,
    pub ent_id: Option<i64>,
    pub asset_type: String,
    pub name: String,
    pub vendor: Option<String>,
    pub model_no: Option<String>,
    pub rated_capacity: Option<Decimal>,
    pub status: Option<String>,
}

/// A metering/telemetry tag, identified by protocol and address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterPoint {
    pub id: i64,
    pub park_id: i64,
    pub ent_id: Option<i64>,
    pub asset_id: Option<i64>,
    pub energy_type: Option<String>,
    pub meas_type: Option<String>,
    pub unit: Option<String>,
    pub sampling_interval_sec: Option<i32>,
    pub protocol: Option<String>,
    pub tag_address: Option<String>,
    pub is_critical: bool,
}
