//! Store data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

/// Store database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Store {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStoreRequest {
    pub title: String,
}

impl Validator<CreateStoreRequest> for CreateStoreRequest {
    fn validate(&self, data: &CreateStoreRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }

        result
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStoreRequest {
    pub title: String,
    pub description: Option<String>,
}

impl Validator<UpdateStoreRequest> for UpdateStoreRequest {
    fn validate(&self, data: &UpdateStoreRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }

        result
    }
}
