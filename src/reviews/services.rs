use sqlx::SqlitePool;
use tracing::info;

use super::models::{Review, ReviewRequest};
use crate::common::{generate_review_id, ApiError, Validator};

pub struct ReviewsService {
    db: SqlitePool,
}

impl ReviewsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_by_store(&self, store_id: &str) -> Result<Vec<Review>, ApiError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(reviews)
    }

    pub async fn get_by_id(&self, review_id: &str) -> Result<Review, ApiError> {
        let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
            .bind(review_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Review not found".to_string()))?;

        Ok(review)
    }

    /// Leave a review on a product. The product must exist and belong to
    /// the given store.
    pub async fn create(
        &self,
        user_id: &str,
        product_id: &str,
        store_id: &str,
        request: ReviewRequest,
    ) -> Result<Review, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let product: Option<(String,)> =
            sqlx::query_as("SELECT id FROM products WHERE id = ? AND store_id = ?")
                .bind(product_id)
                .bind(store_id)
                .fetch_optional(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        if product.is_none() {
            return Err(ApiError::NotFound("Product not found".to_string()));
        }

        let review_id = generate_review_id();

        sqlx::query(
            "INSERT INTO reviews (id, text, rating, user_id, product_id, store_id) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&review_id)
        .bind(&request.text)
        .bind(request.rating)
        .bind(user_id)
        .bind(product_id)
        .bind(store_id)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(review_id = %review_id, product_id = %product_id, "Created review");

        self.get_by_id(&review_id).await
    }

    /// Delete a review. Only its author may remove it.
    pub async fn delete(&self, review_id: &str, user_id: &str) -> Result<Review, ApiError> {
        let review = self.get_by_id(review_id).await?;

        if review.user_id != user_id {
            return Err(ApiError::NotFound("Review not found".to_string()));
        }

        sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(review_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(review_id = %review_id, "Deleted review");

        Ok(review)
    }
}
