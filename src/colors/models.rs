//! Color data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::{ValidationResult, Validator};

/// Color database model. `value` is the CSS color the storefront renders.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Color {
    pub id: String,
    pub name: String,
    pub value: String,
    pub store_id: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ColorRequest {
    pub name: String,
    pub value: String,
}

impl Validator<ColorRequest> for ColorRequest {
    fn validate(&self, data: &ColorRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        }

        if data.value.trim().is_empty() {
            result.add_error("value", "Value is required");
        }

        result
    }
}
