//! User Repository
//!
//! Credentials are stored and compared as plaintext. Dev use only.

use greenmesh_core::domain::user::UserProfile;
use sqlx::PgPool;

/// A stored account, including its password
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl UserRecord {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// Find a user by username
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>("SELECT username, password, role FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Create the account, or reset password and role if it already exists
pub async fn upsert(pool: &PgPool, username: &str, password: &str, role: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO users (username, password, role)
        VALUES ($1, $2, $3)
        ON CONFLICT (username) DO UPDATE
        SET password = EXCLUDED.password, role = EXCLUDED.role
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(role)
    .execute(pool)
    .await?;

    Ok(())
}
