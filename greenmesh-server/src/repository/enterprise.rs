//! Enterprise Repository
//!
//! Handles all database operations related to park enterprises.

use greenmesh_core::domain::park::Enterprise;
use greenmesh_core::dto::master_data::EnterpriseFilter;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{flag_is_set, push_condition};

/// List enterprises, optionally restricted to one park
pub async fn list(pool: &PgPool, filter: &EnterpriseFilter) -> Result<Vec<Enterprise>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<EnterpriseRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &EnterpriseFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT ent_id, park_id, name, industry, is_key_user, contact FROM dim_enterprise",
    );
    let mut has_where = false;

    if let Some(park_id) = filter.park_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("park_id = ").push_bind(park_id);
    }

    qb.push(" ORDER BY ent_id");
    qb
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct EnterpriseRow {
    ent_id: i64,
    park_id: i64,
    name: String,
    industry: Option<String>,
    is_key_user: Option<String>,
    contact: Option<String>,
}

impl From<EnterpriseRow> for Enterprise {
    fn from(row: EnterpriseRow) -> Self {
        Enterprise {
            id: row.ent_id,
            park_id: row.park_id,
            name: row.name,
            industry: row.industry,
            is_key_user: flag_is_set(row.is_key_user.as_deref()),
            contact: row.contact,
        }
    }
}
