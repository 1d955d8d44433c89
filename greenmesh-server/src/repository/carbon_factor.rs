//! Carbon Factor Repository
//!
//! Handles all database operations related to emission factors.

use chrono::NaiveDate;
use greenmesh_core::domain::carbon::CarbonFactor;
use greenmesh_core::dto::master_data::CarbonFactorFilter;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{flag_is_set, push_condition};

/// List carbon factors matching every filter that is set
pub async fn list(
    pool: &PgPool,
    filter: &CarbonFactorFilter,
) -> Result<Vec<CarbonFactor>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<CarbonFactorRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &CarbonFactorFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT factor_id, region, energy_type, factor_value, unit, effective_from, effective_to, \
         source, is_default FROM dim_carbon_factor",
    );
    let mut has_where = false;

    if let Some(region) = &filter.region {
        push_condition(&mut qb, &mut has_where);
        qb.push("region = ").push_bind(region.clone());
    }

    if let Some(energy_type) = &filter.energy_type {
        push_condition(&mut qb, &mut has_where);
        qb.push("energy_type = ").push_bind(energy_type.clone());
    }

    if let Some(day) = filter.active_on {
        push_condition(&mut qb, &mut has_where);
        qb.push("(effective_from <= ")
            .push_bind(day)
            .push(" AND (effective_to IS NULL OR effective_to >= ")
            .push_bind(day)
            .push("))");
    }

    qb.push(" ORDER BY factor_id");
    qb
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct CarbonFactorRow {
    factor_id: i64,
    region: Option<String>,
    energy_type: Option<String>,
    factor_value: Option<Decimal>,
    unit: Option<String>,
    effective_from: NaiveDate,
    effective_to: Option<NaiveDate>,
    source: Option<String>,
    is_default: Option<String>,
}

impl From<CarbonFactorRow> for CarbonFactor {
    fn from(row: CarbonFactorRow) -> Self {
        CarbonFactor {
            id: row.factor_id,
            region: row.region,
            energy_type: row.energy_type,
            factor_value: row.factor_value,
            unit: row.unit,
            effective_from: row.effective_from,
            effective_to: row.effective_to,
            source: row.source,
            is_default: flag_is_set(row.is_default.as_deref()),
        }
    }
}
