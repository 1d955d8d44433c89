use anyhow::Context;
use greenmesh_server::{api, config::Config, db, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greenmesh_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GreenMesh server...");

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Connecting to database...");

    // Create database connection pool
    let pool = db::create_pool(&config)
        .await
        .context("Failed to create database pool")?;

    tracing::info!("Database connection pool created");

    // Run migrations
    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    if config.default_admin {
        db::ensure_default_user(&pool)
            .await
            .context("Failed to ensure default admin user")?;
    }

    if config.seed_demo_enabled() {
        seed::seed_demo_data(&pool)
            .await
            .context("Failed to seed demo data")?;
    } else {
        tracing::info!("Demo data seeding disabled (profile {})", config.profile);
    }

    // Build router with all API endpoints
    let app = api::create_router(pool);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
