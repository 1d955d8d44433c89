//! Carbon emission factor domain types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Emission factor for an energy type in a region, valid over a date range
///
/// `effective_to` of `None` means the factor is still in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFactor {
    pub id: i64,
    pub region: Option<String>,
    pub energy_type: Option<String>,
    pub factor_value: Option<Decimal>,
    pub unit: Option<String>,
    pub effective_from: NaiveDate,
    pub effective_to: Option<NaiveDate>,
    pub source: Option<String>,
    pub is_default: bool,
}
