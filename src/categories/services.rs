use sqlx::SqlitePool;
use tracing::info;

use super::models::{Category, CategoryRequest};
use crate::common::{generate_category_id, ApiError, Validator};

pub struct CategoriesService {
    db: SqlitePool,
}

impl CategoriesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_by_store(&self, store_id: &str) -> Result<Vec<Category>, ApiError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(categories)
    }

    pub async fn get_by_id(&self, category_id: &str) -> Result<Category, ApiError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        Ok(category)
    }

    /// Create a category in a store owned by the given user
    pub async fn create(
        &self,
        store_id: &str,
        user_id: &str,
        request: CategoryRequest,
    ) -> Result<Category, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        self.assert_store_owned(store_id, user_id).await?;

        let category_id = generate_category_id();

        sqlx::query("INSERT INTO categories (id, title, description, store_id) VALUES (?, ?, ?, ?)")
            .bind(&category_id)
            .bind(&request.title)
            .bind(&request.description)
            .bind(store_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(category_id = %category_id, store_id = %store_id, "Created category");

        self.get_by_id(&category_id).await
    }

    pub async fn update(
        &self,
        category_id: &str,
        user_id: &str,
        request: CategoryRequest,
    ) -> Result<Category, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let category = self.get_by_id(category_id).await?;
        self.assert_store_owned(&category.store_id, user_id).await?;

        sqlx::query("UPDATE categories SET title = ?, description = ? WHERE id = ?")
            .bind(&request.title)
            .bind(&request.description)
            .bind(category_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_by_id(category_id).await
    }

    pub async fn delete(&self, category_id: &str, user_id: &str) -> Result<Category, ApiError> {
        let category = self.get_by_id(category_id).await?;
        self.assert_store_owned(&category.store_id, user_id).await?;

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(category_id = %category_id, "Deleted category");

        Ok(category)
    }

    async fn assert_store_owned(&self, store_id: &str, user_id: &str) -> Result<(), ApiError> {
        let owned: Option<(String,)> =
            sqlx::query_as("SELECT id FROM stores WHERE id = ? AND user_id = ?")
                .bind(store_id)
                .bind(user_id)
                .fetch_optional(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?;

        match owned {
            Some(_) => Ok(()),
            None => Err(ApiError::NotFound("Store not found".to_string())),
        }
    }
}
