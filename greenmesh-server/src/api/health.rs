//! Liveness probe used by the dashboard and container health checks.

use axum::http::StatusCode;

/// GET /health
///
/// Does not touch the database, so it answers even while the pool is down.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
