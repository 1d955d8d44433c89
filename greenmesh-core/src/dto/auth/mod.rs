//! Login DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserProfile;

/// Username/password login request; missing fields read as blank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login: an opaque bearer token and who it was issued to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
    pub issued_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let resp = LoginResponse {
            token: "abc".to_string(),
            user: UserProfile {
                username: "admin".to_string(),
                role: "admin".to_string(),
            },
            issued_at: "2024-05-01T00:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["user"]["role"], "admin");
        assert_eq!(json["issuedAt"], "2024-05-01T00:00:00Z");
    }
}
