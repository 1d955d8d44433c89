//! Park Repository
//!
//! Handles all database operations related to parks.

use greenmesh_core::domain::park::Park;
use sqlx::PgPool;

/// Insert a park and return it with its generated id
pub async fn create(
    pool: &PgPool,
    name: &str,
    region: Option<&str>,
    timezone: &str,
    boundary_geojson: Option<&str>,
) -> Result<Park, sqlx::Error> {
    let row = sqlx::query_as::<_, ParkRow>(
        r#"
        INSERT INTO dim_park (name, region, timezone, boundary_geojson)
        VALUES ($1, $2, $3, $4)
        RETURNING park_id, name, region, timezone, boundary_geojson
        "#,
    )
    .bind(name)
    .bind(region)
    .bind(timezone)
    .bind(boundary_geojson)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Find a park by ID
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Park>, sqlx::Error> {
    let row = sqlx::query_as::<_, ParkRow>(
        r#"
        SELECT park_id, name, region, timezone, boundary_geojson
        FROM dim_park
        WHERE park_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Find the id of the first park with the given name
pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<Option<i64>, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT park_id FROM dim_park WHERE name = $1 ORDER BY park_id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

/// List all parks
pub async fn list_all(pool: &PgPool) -> Result<Vec<Park>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ParkRow>(
        r#"
        SELECT park_id, name, region, timezone, boundary_geojson
        FROM dim_park
        ORDER BY park_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ParkRow {
    park_id: i64,
    name: String,
    region: Option<String>,
    timezone: Option<String>,
    boundary_geojson: Option<String>,
}

impl From<ParkRow> for Park {
    fn from(row: ParkRow) -> Self {
        Park {
            id: row.park_id,
            name: row.name,
            region: row.region,
            timezone: row.timezone,
            boundary_geojson: row.boundary_geojson,
        }
    }
}
