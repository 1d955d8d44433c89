//! Dashboard user domain types

use serde::{Deserialize, Serialize};

/// Public part of a user, returned after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub role: String,
}
