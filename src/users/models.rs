//! User data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
///
/// `password_hash` is absent for OAuth-only accounts and never leaves the
/// server in API responses.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub created_at: Option<String>,
}

impl User {
    /// OAuth-only accounts have no stored password hash
    pub fn is_oauth_only(&self) -> bool {
        self.password_hash.is_none()
    }
}
