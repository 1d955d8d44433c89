//! Dispatch plan endpoints

use crate::GreenmeshClient;
use crate::error::Result;
use greenmesh_core::domain::dispatch::{DispatchPlan, DispatchPlanWithDetails};
use greenmesh_core::dto::dispatch::{CreateDispatchPlan, DispatchPlanFilter};
use reqwest::Method;

impl GreenmeshClient {
    /// List plan headers, newest first
    pub async fn list_plans(&self, filter: &DispatchPlanFilter) -> Result<Vec<DispatchPlan>> {
        let response = self
            .request(Method::GET, "/api/dispatch/plans")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a plan together with its details
    pub async fn get_plan(&self, id: i64) -> Result<DispatchPlanWithDetails> {
        let response = self
            .request(Method::GET, &format!("/api/dispatch/plans/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a plan; header and details are stored atomically
    pub async fn create_plan(&self, req: &CreateDispatchPlan) -> Result<DispatchPlanWithDetails> {
        let response = self
            .request(Method::POST, "/api/dispatch/plans")
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
