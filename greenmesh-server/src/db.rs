use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;
use crate::repository::user_repository;

/// Dev account upserted at startup
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_ADMIN_ROLE: &str = "admin";

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Reference data
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_energy_type (
            energy_type_code VARCHAR(32) PRIMARY KEY,
            name VARCHAR(128) NOT NULL,
            category VARCHAR(64)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Parks
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_park (
            park_id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            region VARCHAR(128),
            timezone VARCHAR(64),
            boundary_geojson TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Enterprises
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_enterprise (
            ent_id BIGSERIAL PRIMARY KEY,
            park_id BIGINT NOT NULL REFERENCES dim_park(park_id),
            name VARCHAR(255) NOT NULL,
            industry VARCHAR(128),
            is_key_user CHAR(1) NOT NULL DEFAULT 'N',
            contact VARCHAR(255)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Assets
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_asset (
            asset_id BIGSERIAL PRIMARY KEY,
            park_id BIGINT NOT NULL REFERENCES dim_park(park_id),
            ent_id BIGINT REFERENCES dim_enterprise(ent_id),
            asset_type VARCHAR(32) NOT NULL,
            name VARCHAR(255) NOT NULL,
            vendor VARCHAR(128),
            model_no VARCHAR(128),
            rated_capacity NUMERIC(18, 4),
            status VARCHAR(32)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Meter points
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_meter_point (
            point_id BIGSERIAL PRIMARY KEY,
            park_id BIGINT NOT NULL REFERENCES dim_park(park_id),
            ent_id BIGINT,
            asset_id BIGINT,
            energy_type VARCHAR(32),
            meas_type VARCHAR(64),
            unit VARCHAR(32),
            sampling_interval_s INTEGER,
            protocol VARCHAR(32),
            tag_address VARCHAR(255),
            is_critical CHAR(1) NOT NULL DEFAULT 'N'
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Price zones
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_price_zone (
            zone_id BIGSERIAL PRIMARY KEY,
            park_id BIGINT NOT NULL REFERENCES dim_park(park_id),
            grid_company VARCHAR(255),
            tariff_rule_version VARCHAR(64)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Carbon factors
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dim_carbon_factor (
            factor_id BIGSERIAL PRIMARY KEY,
            region VARCHAR(128),
            energy_type VARCHAR(32),
            factor_value NUMERIC(18, 6),
            unit VARCHAR(32),
            effective_from DATE NOT NULL,
            effective_to DATE,
            source VARCHAR(255),
            is_default CHAR(1) NOT NULL DEFAULT 'N'
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Time series: raw collector samples and the cleaned/aggregated store
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS raw_timeseries (
            id BIGSERIAL PRIMARY KEY,
            point_id BIGINT NOT NULL,
            ts TIMESTAMPTZ NOT NULL,
            value NUMERIC(20, 6),
            quality_flag VARCHAR(16),
            source_system VARCHAR(64)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ts_measurement (
            id BIGSERIAL PRIMARY KEY,
            point_id BIGINT NOT NULL,
            ts TIMESTAMPTZ NOT NULL,
            value NUMERIC(20, 6),
            quality_flag VARCHAR(16),
            agg_level VARCHAR(16)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Generation forecasts
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS gen_forecast (
            id BIGSERIAL PRIMARY KEY,
            asset_id BIGINT NOT NULL,
            forecast_issue_ts TIMESTAMPTZ NOT NULL,
            ts TIMESTAMPTZ NOT NULL,
            p_kw_pred NUMERIC(18, 4),
            p10 NUMERIC(18, 4),
            p90 NUMERIC(18, 4),
            model_version VARCHAR(64),
            scenario VARCHAR(64)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Dispatch plans
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dispatch_plan (
            plan_id BIGSERIAL PRIMARY KEY,
            park_id BIGINT NOT NULL,
            horizon_start TIMESTAMPTZ NOT NULL,
            horizon_end TIMESTAMPTZ NOT NULL,
            interval_min INTEGER,
            strategy_profile_id BIGINT,
            status VARCHAR(32) NOT NULL,
            created_ts TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dispatch_plan_detail (
            id BIGSERIAL PRIMARY KEY,
            plan_id BIGINT NOT NULL REFERENCES dispatch_plan(plan_id) ON DELETE CASCADE,
            ts TIMESTAMPTZ NOT NULL,
            asset_id BIGINT NOT NULL,
            p_set_kw NUMERIC(18, 4),
            q_set_kvar NUMERIC(18, 4),
            heat_set_mw NUMERIC(18, 4),
            soc_target NUMERIC(9, 4)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Dashboard users
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username VARCHAR(64) UNIQUE NOT NULL,
            password VARCHAR(128) NOT NULL,
            role VARCHAR(32) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for the filtered and ranged reads
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_enterprise_park ON dim_enterprise(park_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_asset_park ON dim_asset(park_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_meter_point_park ON dim_meter_point(park_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_raw_timeseries_point_ts ON raw_timeseries(point_id, ts)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_ts_measurement_point_ts ON ts_measurement(point_id, ts)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_gen_forecast_asset_ts ON gen_forecast(asset_id, ts)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_dispatch_plan_park ON dispatch_plan(park_id, created_ts DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_dispatch_detail_plan ON dispatch_plan_detail(plan_id, ts, asset_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Upsert the dev admin account so a fresh database can be logged into
pub async fn ensure_default_user(pool: &PgPool) -> Result<(), sqlx::Error> {
    user_repository::upsert(
        pool,
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_PASSWORD,
        DEFAULT_ADMIN_ROLE,
    )
    .await?;

    tracing::info!(
        "Default admin user ({}/{}) ensured for dev only",
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_PASSWORD
    );
    Ok(())
}
