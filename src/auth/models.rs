//! Authentication data models

use serde::{Deserialize, Serialize};

use crate::common::{validation::is_valid_email, ValidationResult, Validator};
use crate::users::User;

/// Login / register request body
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl Validator<AuthRequest> for AuthRequest {
    fn validate(&self, data: &AuthRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !is_valid_email(&data.email) {
            result.add_error("email", "Invalid email address");
        }

        if data.password.chars().count() < 6 {
            result.add_error("password", "Password must be at least 6 characters");
        }

        result
    }
}

/// Internal result of a successful login/register/refresh/OAuth flow.
/// The refresh token never appears in a response body; handlers move it
/// into the HTTP-only cookie.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body for session-producing endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}
