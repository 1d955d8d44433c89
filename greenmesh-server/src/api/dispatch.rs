//! Dispatch Plan API Handlers
//!
//! HTTP endpoints for dispatch plan management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use greenmesh_core::domain::dispatch::{DispatchPlan, DispatchPlanWithDetails};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, DispatchPlanFilter};
use sqlx::PgPool;

use crate::api::error::{ApiError, ApiResult};
use crate::service::dispatch_service::{self, DispatchError};

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotFound(id) => ApiError::NotFound(format!("Plan {} not found", id)),
            DispatchError::ValidationError(msg) => ApiError::BadRequest(msg),
            DispatchError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

/// GET /api/dispatch/plans?parkId&status
pub async fn list_plans(
    State(pool): State<PgPool>,
    Query(filter): Query<DispatchPlanFilter>,
) -> ApiResult<Json<Vec<DispatchPlan>>> {
    tracing::debug!("Listing dispatch plans: {:?}", filter);

    let plans = dispatch_service::list_plans(&pool, &filter).await?;
    Ok(Json(plans))
}

/// GET /api/dispatch/plans/{id}
pub async fn get_plan(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DispatchPlanWithDetails>> {
    tracing::debug!("Getting dispatch plan: {}", id);

    let plan = dispatch_service::get_plan(&pool, id).await?;
    Ok(Json(plan))
}

/// POST /api/dispatch/plans
/// Create a plan together with its details
pub async fn create_plan(
    State(pool): State<PgPool>,
    Json(req): Json<CreateDispatchPlan>,
) -> ApiResult<Json<DispatchPlanWithDetails>> {
    tracing::info!(
        "Creating dispatch plan for park {} with {} details",
        req.park_id,
        req.details.len()
    );

    let plan = dispatch_service::create_plan(&pool, req).await?;
    Ok(Json(plan))
}
