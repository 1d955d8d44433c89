//! Time-series endpoints

use crate::GreenmeshClient;
use crate::error::Result;
use greenmesh_core::domain::timeseries::Measurement;
use greenmesh_core::dto::InsertedCount;
use greenmesh_core::dto::timeseries::{LatestQuery, MeasurementQuery, RawPointValue};
use reqwest::Method;

impl GreenmeshClient {
    /// Push raw collector samples, returning the number of stored rows
    pub async fn ingest_raw_batch(&self, values: &[RawPointValue]) -> Result<u64> {
        let response = self
            .request(Method::POST, "/api/timeseries/raw/batch")
            .json(values)
            .send()
            .await?;

        let count: InsertedCount = self.handle_response(response).await?;
        Ok(count.inserted)
    }

    /// Measurements of one point in an inclusive time range
    pub async fn query_measurements(&self, query: &MeasurementQuery) -> Result<Vec<Measurement>> {
        let response = self
            .request(Method::GET, "/api/timeseries/measurements")
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Latest measurement of each point
    pub async fn query_latest(&self, point_ids: &[i64]) -> Result<Vec<Measurement>> {
        let response = self
            .request(Method::GET, "/api/timeseries/latest")
            .query(&LatestQuery::from_ids(point_ids))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
