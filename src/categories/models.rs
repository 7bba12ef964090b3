//! Category data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

/// Category database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub store_id: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub title: String,
    pub description: Option<String>,
}

impl Validator<CategoryRequest> for CategoryRequest {
    fn validate(&self, data: &CategoryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }

        result
    }
}
