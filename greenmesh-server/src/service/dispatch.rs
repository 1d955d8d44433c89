//! Dispatch Plan Service
//!
//! Business logic for dispatch plan management.

use greenmesh_core::domain::dispatch::{DEFAULT_PLAN_STATUS, DispatchPlan, DispatchPlanWithDetails};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, DispatchPlanFilter};
use sqlx::PgPool;

use crate::repository::dispatch_repository;

/// Service error type
#[derive(Debug)]
pub enum DispatchError {
    NotFound(i64),
    ValidationError(String),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for DispatchError {
    fn from(err: sqlx::Error) -> Self {
        DispatchError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Create a plan with its details and return it as stored
pub async fn create_plan(pool: &PgPool, req: CreateDispatchPlan) -> Result<DispatchPlanWithDetails> {
    validate_plan_request(&req)?;

    let status = effective_status(req.status.as_deref());
    let plan_id = dispatch_repository::create_with_details(pool, &req, status).await?;

    tracing::info!(
        "Dispatch plan created: {} (park {}, {} details, {})",
        plan_id,
        req.park_id,
        req.details.len(),
        status
    );

    get_plan(pool, plan_id).await
}

/// Get a plan header and its ordered details
pub async fn get_plan(pool: &PgPool, id: i64) -> Result<DispatchPlanWithDetails> {
    let plan = dispatch_repository::find_by_id(pool, id)
        .await?
        .ok_or(DispatchError::NotFound(id))?;

    let details = dispatch_repository::find_details(pool, id).await?;

    Ok(DispatchPlanWithDetails { plan, details })
}

/// List plan headers, newest first
pub async fn list_plans(pool: &PgPool, filter: &DispatchPlanFilter) -> Result<Vec<DispatchPlan>> {
    Ok(dispatch_repository::list(pool, filter).await?)
}

// =============================================================================
// Validation
// =============================================================================

fn effective_status(status: Option<&str>) -> &str {
    status
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PLAN_STATUS)
}

fn validate_plan_request(req: &CreateDispatchPlan) -> Result<()> {
    if req.horizon_end < req.horizon_start {
        return Err(DispatchError::ValidationError(
            "horizonEnd must not be before horizonStart".to_string(),
        ));
    }

    if req.interval_min.is_some_and(|interval| interval <= 0) {
        return Err(DispatchError::ValidationError(
            "intervalMin must be positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn plan() -> CreateDispatchPlan {
        let start = Utc::now();
        CreateDispatchPlan {
            park_id: 1,
            horizon_start: start,
            horizon_end: start + Duration::hours(1),
            interval_min: Some(15),
            strategy_profile_id: None,
            status: None,
            details: vec![],
        }
    }

    #[test]
    fn test_effective_status() {
        assert_eq!(effective_status(None), "DRAFT");
        assert_eq!(effective_status(Some("  ")), "DRAFT");
        assert_eq!(effective_status(Some("RUNNING")), "RUNNING");
    }

    #[test]
    fn test_validate_inverted_horizon() {
        let mut req = plan();
        req.horizon_end = req.horizon_start - Duration::minutes(1);
        assert!(matches!(
            validate_plan_request(&req),
            Err(DispatchError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_interval() {
        let mut req = plan();
        req.interval_min = Some(0);
        assert!(validate_plan_request(&req).is_err());

        req.interval_min = None;
        assert!(validate_plan_request(&req).is_ok());
    }

    #[test]
    fn test_validate_valid_plan() {
        assert!(validate_plan_request(&plan()).is_ok());
    }
}
