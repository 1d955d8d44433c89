//! Asset Repository
//!
//! Handles all database operations related to energy assets.

use greenmesh_core::domain::asset::Asset;
use greenmesh_core::dto::master_data::AssetFilter;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::push_condition;

/// Columns needed to register an asset
#[derive(Debug, Clone)]
pub struct NewAsset<'a> {
    pub park_id: i64,
    pub asset_type: &'a str,
    pub name: &'a str,
    pub rated_capacity: Option<Decimal>,
    pub status: Option<&'a str>,
}

/// Insert an asset and return its generated id
pub async fn create(pool: &PgPool, asset: &NewAsset<'_>) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        INSERT INTO dim_asset (park_id, asset_type, name, rated_capacity, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING asset_id
        "#,
    )
    .bind(asset.park_id)
    .bind(asset.asset_type)
    .bind(asset.name)
    .bind(asset.rated_capacity)
    .bind(asset.status)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

/// Find an asset by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Asset>, sqlx::Error> {
    let row = sqlx::query_as::<_, AssetRow>(
        r#"
        SELECT asset_id, park_id, ent_id, asset_type, name, vendor, model_no, rated_capacity, status
        FROM dim_asset
        WHERE asset_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Find the id of the first asset with the given name
pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<Option<i64>, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT asset_id FROM dim_asset WHERE name = $1 ORDER BY asset_id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

/// List assets matching every filter that is set
pub async fn list(pool: &PgPool, filter: &AssetFilter) -> Result<Vec<Asset>, sqlx::Error> {
    let mut qb = list_query(filter);
    let rows = qb.build_query_as::<AssetRow>().fetch_all(pool).await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

fn list_query(filter: &AssetFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT asset_id, park_id, ent_id, asset_type, name, vendor, model_no, rated_capacity, status \
         FROM dim_asset",
    );
    let mut has_where = false;

    if let Some(park_id) = filter.park_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("park_id = ").push_bind(park_id);
    }

    if let Some(ent_id) = filter.ent_id {
        push_condition(&mut qb, &mut has_where);
        qb.push("ent_id = ").push_bind(ent_id);
    }

    if let Some(asset_type) = &filter.asset_type {
        push_condition(&mut qb, &mut has_where);
        qb.push("asset_type = ").push_bind(asset_type.clone());
    }

    qb.push(" ORDER BY asset_id");
    qb
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct AssetRow {
    asset_id: i64,
    park_id: i64,
    ent_id: Option<i64>,
    asset_type: String,
    name: String,
    vendor: Option<String>,
    model_no: Option<String>,
    rated_capacity: Option<Decimal>,
    status: Option<String>,
}

impl From<AssetRow> for Asset {
    fn from(row: AssetRow) -> Self {
        Asset {
            id: row.asset_id,
            park_id: row.park_id,
            ent_id: row.ent_id,
            asset_type: row.asset_type,
            name: row.name,
            vendor: row.vendor,
            model_no: row.model_no,
            rated_capacity: row.rated_capacity,
            status: row.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_without_filters() {
        let qb = list_query(&AssetFilter::default());
        assert!(!qb.sql().contains("WHERE"));
        assert!(qb.sql().ends_with("FROM dim_asset ORDER BY asset_id"));
    }

    #[test]
    fn test_list_query_all_filters() {
        let filter = AssetFilter {
            park_id: Some(1),
            ent_id: Some(2),
            asset_type: Some("BESS".to_string()),
        };

        let qb = list_query(&filter);
        assert!(
            qb.sql()
                .ends_with(" WHERE park_id = $1 AND ent_id = $2 AND asset_type = $3 ORDER BY asset_id")
        );
    }

    #[test]
    fn test_list_query_type_only() {
        let filter = AssetFilter {
            asset_type: Some("PV".to_string()),
            ..Default::default()
        };

        let qb = list_query(&filter);
        assert!(qb.sql().ends_with(" WHERE asset_type = $1 ORDER BY asset_id"));
    }
}
