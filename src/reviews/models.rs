//! Review data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

/// Review database model
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Review {
    pub id: String,
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub product_id: String,
    pub store_id: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub text: String,
    pub rating: i64,
}

impl Validator<ReviewRequest> for ReviewRequest {
    fn validate(&self, data: &ReviewRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.text.trim().is_empty() {
            result.add_error("text", "Text is required");
        }

        if !(1..=5).contains(&data.rating) {
            result.add_error("rating", "Rating must be between 1 and 5");
        }

        result
    }
}
