//! Auth API Handlers

use axum::{Json, extract::State};
use greenmesh_core::dto::auth::{LoginRequest, LoginResponse};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::auth_service::{self, AuthError};

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::ValidationError(msg) => ApiError::BadRequest(msg),
            AuthError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            AuthError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

/// POST /api/auth/login
pub async fn login(
    State(pool): State<PgPool>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = auth_service::login(&pool, req).await?;
    Ok(Json(response))
}
