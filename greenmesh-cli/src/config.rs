//! Configuration module
//!
//! Handles CLI configuration: server URL and optional token.

use greenmesh_client::GreenmeshClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the GreenMesh server
    pub api_url: String,
    /// Token returned by a previous login
    pub token: Option<String>,
}

impl Config {
    /// Build an API client, attaching the token when one is configured
    pub fn client(&self) -> GreenmeshClient {
        let client = GreenmeshClient::new(&self.api_url);
        match self.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_carries_token() {
        let config = Config {
            api_url: "http://localhost:8080/".to_string(),
            token: Some("abc".to_string()),
        };

        let client = config.client();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.token(), Some("abc"));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config = Config {
            api_url: "http://localhost:8080".to_string(),
            token: Some(String::new()),
        };

        assert_eq!(config.client().token(), None);
    }
}
