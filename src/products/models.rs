//! Product data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::{deserialize_images, serialize_images};
use crate::common::{ValidationResult, Validator};

/// Product database model
///
/// Images are stored as a JSON array string in the database and exposed as
/// a plain array in API responses.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: i64,
    #[serde(
        serialize_with = "serialize_images",
        deserialize_with = "deserialize_images",
        default
    )]
    pub images: Option<String>,
    pub store_id: String,
    pub category_id: Option<String>,
    pub color_id: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub title: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: Option<String>,
    pub color_id: Option<String>,
}

impl Validator<ProductRequest> for ProductRequest {
    fn validate(&self, data: &ProductRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        }

        if data.description.trim().is_empty() {
            result.add_error("description", "Description is required");
        }

        if data.price < 0 {
            result.add_error("price", "Price must not be negative");
        }

        result
    }
}

/// Optional search filter for the public product listing
#[derive(Debug, Deserialize)]
pub struct ProductSearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}
