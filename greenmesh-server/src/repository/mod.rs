//! Repository Module
//!
//! Data access layer for the dashboard backend.
//! Each repository handles database operations for a specific table family.

pub mod asset;
pub mod carbon_factor;
pub mod dispatch;
pub mod energy_type;
pub mod enterprise;
pub mod forecast;
pub mod meter_point;
pub mod park;
pub mod price_zone;
pub mod timeseries;
pub mod user;

// Re-export for convenience
pub use asset as asset_repository;
pub use carbon_factor as carbon_factor_repository;
pub use dispatch as dispatch_repository;
pub use energy_type as energy_type_repository;
pub use enterprise as enterprise_repository;
pub use forecast as forecast_repository;
pub use meter_point as meter_point_repository;
pub use park as park_repository;
pub use price_zone as price_zone_repository;
pub use timeseries as timeseries_repository;
pub use user as user_repository;

use sqlx::{Postgres, QueryBuilder};

/// Rows per multi-row `INSERT ... VALUES`; keeps bind counts far below
/// Postgres' 65535 parameter limit for every table written in batches.
pub const INSERT_CHUNK_SIZE: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Pushes ` WHERE ` before the first filter condition and ` AND ` before the rest
fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    qb.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

/// Legacy `'Y'`/`'N'` flag columns
fn flag_is_set(flag: Option<&str>) -> bool {
    flag.is_some_and(|f| f.trim().eq_ignore_ascii_case("y"))
}

fn flag_value(set: bool) -> &'static str {
    if set { "Y" } else { "N" }
}
