//! Master data endpoints

use crate::GreenmeshClient;
use crate::error::Result;
use greenmesh_core::domain::asset::{Asset, MeterPoint};
use greenmesh_core::domain::carbon::CarbonFactor;
use greenmesh_core::domain::park::{Enterprise, Park, PriceZone};
use greenmesh_core::dto::master_data::{
    AssetFilter, CarbonFactorFilter, CreatePark, EnterpriseFilter, MeterPointFilter,
    PriceZoneFilter,
};
use reqwest::Method;

impl GreenmeshClient {
    // =============================================================================
    // Parks
    // =============================================================================

    /// List all parks
    pub async fn list_parks(&self) -> Result<Vec<Park>> {
        let response = self.request(Method::GET, "/api/parks").send().await?;
        self.handle_response(response).await
    }

    /// Create a park; the server fills in the default timezone when omitted
    pub async fn create_park(&self, req: &CreatePark) -> Result<Park> {
        let response = self
            .request(Method::POST, "/api/parks")
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a park by ID
    pub async fn get_park(&self, id: i64) -> Result<Park> {
        let response = self
            .request(Method::GET, &format!("/api/parks/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    // =============================================================================
    // Lookups
    // =============================================================================

    pub async fn list_enterprises(&self, filter: &EnterpriseFilter) -> Result<Vec<Enterprise>> {
        let response = self
            .request(Method::GET, "/api/enterprises")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn list_assets(&self, filter: &AssetFilter) -> Result<Vec<Asset>> {
        let response = self
            .request(Method::GET, "/api/assets")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get an asset by ID
    pub async fn get_asset(&self, id: i64) -> Result<Asset> {
        let response = self
            .request(Method::GET, &format!("/api/assets/{}", id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn list_meter_points(&self, filter: &MeterPointFilter) -> Result<Vec<MeterPoint>> {
        let response = self
            .request(Method::GET, "/api/meter-points")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn list_price_zones(&self, filter: &PriceZoneFilter) -> Result<Vec<PriceZone>> {
        let response = self
            .request(Method::GET, "/api/price-zones")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List carbon factors, e.g. the ones in force on a given day
    pub async fn list_carbon_factors(&self, filter: &CarbonFactorFilter) -> Result<Vec<CarbonFactor>> {
        let response = self
            .request(Method::GET, "/api/carbon-factors")
            .query(filter)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
