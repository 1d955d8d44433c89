//! Auth Service
//!
//! Plaintext credential check that hands out an opaque random token. Tokens
//! are neither stored nor verified anywhere.

use chrono::Utc;
use greenmesh_core::dto::auth::{LoginRequest, LoginResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::user_repository;

pub const EMPTY_CREDENTIALS: &str = "username or password is empty";
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Service error type
#[derive(Debug)]
pub enum AuthError {
    ValidationError(String),
    Unauthorized(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

/// Check credentials and issue a token
pub async fn login(pool: &PgPool, req: LoginRequest) -> Result<LoginResponse> {
    if req.username.trim().is_empty() || req.password.trim().is_empty() {
        return Err(AuthError::ValidationError(EMPTY_CREDENTIALS.to_string()));
    }

    let user = user_repository::find_by_username(pool, &req.username)
        .await?
        .filter(|u| u.password == req.password)
        .ok_or_else(|| {
            tracing::warn!("Rejected login for {}", req.username);
            AuthError::Unauthorized(INVALID_CREDENTIALS.to_string())
        })?;

    tracing::info!("User logged in: {} ({})", user.username, user.role);

    Ok(LoginResponse {
        token: Uuid::new_v4().to_string(),
        user: user.profile(),
        issued_at: Utc::now(),
    })
}
