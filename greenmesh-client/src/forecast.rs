//! Generation forecast endpoints

use crate::GreenmeshClient;
use crate::error::Result;
use greenmesh_core::domain::forecast::GenForecastPoint;
use greenmesh_core::dto::InsertedCount;
use greenmesh_core::dto::forecast::{GenForecastQuery, GenForecastWrite};
use reqwest::Method;

impl GreenmeshClient {
    /// Upload forecast points, returning the number of stored rows
    pub async fn save_generation_forecast(&self, points: &[GenForecastWrite]) -> Result<u64> {
        let response = self
            .request(Method::POST, "/api/forecast/gen/batch")
            .json(points)
            .send()
            .await?;

        let count: InsertedCount = self.handle_response(response).await?;
        Ok(count.inserted)
    }

    pub async fn get_generation_forecast(&self, query: &GenForecastQuery) -> Result<Vec<GenForecastPoint>> {
        let response = self
            .request(Method::GET, "/api/forecast/gen")
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
