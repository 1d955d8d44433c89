//! GreenMesh HTTP Client
//!
//! A typed async client for the GreenMesh dashboard backend API.
//!
//! # Example
//!
//! ```no_run
//! use greenmesh_client::GreenmeshClient;
//! use greenmesh_core::dto::master_data::AssetFilter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GreenmeshClient::new("http://localhost:8080");
//!     let session = client.login("admin", "admin123").await?;
//!     let client = client.with_token(session.token);
//!
//!     let assets = client.list_assets(&AssetFilter::default()).await?;
//!     println!("{} assets", assets.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod auth;
mod dispatch;
mod forecast;
mod master_data;
mod timeseries;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// HTTP client for the GreenMesh API
///
/// Methods are grouped by area:
/// - Login
/// - Master data (parks, enterprises, assets, meter points, price zones, carbon factors)
/// - Time series ingest and queries
/// - Generation forecasts
/// - Dispatch plans
#[derive(Debug, Clone)]
pub struct GreenmeshClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Sent as a bearer token when set
    token: Option<String>,
}

impl GreenmeshClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use greenmesh_client::GreenmeshClient;
    ///
    /// let client = GreenmeshClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Attach a token returned by [`GreenmeshClient::login`]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
