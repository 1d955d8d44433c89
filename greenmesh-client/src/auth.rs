//! Login endpoint

use crate::GreenmeshClient;
use crate::error::Result;
use greenmesh_core::dto::auth::{LoginRequest, LoginResponse};
use reqwest::Method;

impl GreenmeshClient {
    /// Exchange credentials for a token
    ///
    /// The returned client is unchanged; pass `response.token` to
    /// [`GreenmeshClient::with_token`] to use it.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(&req)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
