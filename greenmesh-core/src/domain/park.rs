//! Park domain types

use serde::{Deserialize, Serialize};

/// Timezone applied to parks created without one
pub const DEFAULT_PARK_TIMEZONE: &str = "Asia/Shanghai";

/// A physical site containing energy assets and meter points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    pub id: i64,
    pub name: String,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub boundary_geojson: Option<String>,
}

/// An enterprise (tenant) located inside a park
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enterprise {
    pub id: i64,
    pub park_id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub is_key_user: bool,
    pub contact: Option<String>,
}

/// Electricity price zone a park is billed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceZone {
    pub id: i64,
    pub park_id: i64,
    pub grid_company: Option<String>,
    pub tariff_rule_version: Option<String>,
}
