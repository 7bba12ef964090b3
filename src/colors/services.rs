use sqlx::SqlitePool;
use tracing::info;

use super::models::{Color, ColorRequest};
use crate::common::{generate_color_id, ApiError, Validator};

pub struct ColorsService {
    db: SqlitePool,
}

impl ColorsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn get_by_store(&self, store_id: &str) -> Result<Vec<Color>, ApiError> {
        let colors = sqlx::query_as::<_, Color>(
            "SELECT * FROM colors WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(colors)
    }

    pub async fn get_by_id(&self, color_id: &str) -> Result<Color, ApiError> {
        let color = sqlx::query_as::<_, Color>("SELECT * FROM colors WHERE id = ?")
            .bind(color_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Color not found".to_string()))?;

        Ok(color)
    }

    /// Create a color in a store owned by the given user
    pub async fn create(
        &self,
        store_id: &str,
        user_id: &str,
        request: ColorRequest,
    ) -> Result<Color, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        self.assert_store_owned(store_id, user_id).await?;

        let color_id = generate_color_id();

        sqlx::query("INSERT INTO colors (id, name, value, store_id) VALUES (?, ?, ?, ?)")
            .bind(&color_id)
            .bind(&request.name)
            .bind(&request.value)
            .bind(store_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(color_id = %color_id, store_id = %store_id, "Created color");

        self.get_by_id(&color_id).await
    }

    pub async fn update(
        &self,
        color_id: &str,
        user_id: &str,
        request: ColorRequest,
    ) -> Result<Color, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let color = self.get_by_id(color_id).await?;
        self.assert_store_owned(&color.store_id, user_id).await?;

        sqlx::query("UPDATE colors SET name = ?, value = ? WHERE id = ?")
            .bind(&request.name)
            .bind(&request.value)
            .bind(color_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_by_id(color_id).await
    }

    pub async fn delete(&self, color_id: &str, user_id: &str) -> Result<Color, ApiError> {
        let color = self.get_by_id(color_id).await?;
        self.assert_store_owned(&color.store_id, user_id).await?;

        sqlx::query("DELETE FROM colors WHERE id = ?")
            .bind(color_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(color_id = %color_id, "Deleted color");

        Ok(color)
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
