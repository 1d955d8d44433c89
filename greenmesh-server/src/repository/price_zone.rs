//! Price Zone Repository

use greenmesh_core::domain::park::PriceZone;
use greenmesh_core::dto::master_data::PriceZoneFilter;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::push_condition;

/// List price zones, optionally restricted to one park
pub async fn list(pool: &PgPool, filter: &PriceZoneFilter) -> Result<Vec<PriceZone>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<PriceZoneRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &PriceZoneFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT zone_id, park_id, grid_company, tariff_rule_version FROM dim_price_zone",
    );
    let mut has_where = false;

    if let Some(park_id) = filter.park_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("park_id = ").push_bind(park_id);
    }

    qb.push(" ORDER BY zone_id");
    qb
}

#[derive(sqlx::FromRow)]
struct PriceZoneRow {
    zone_id: i64,
    park_id: i64,
    grid_company: Option<String>,
    tariff_rule_version: Option<String>,
}

impl From<PriceZoneRow> for PriceZone {
    fn from(row: PriceZoneRow) -> Self {
        PriceZone {
            id: row.zone_id,
            park_id: row.park_id,
            grid_company: row.grid_company,
            tariff_rule_version: row.tariff_rule_version,
        }
    }
}
