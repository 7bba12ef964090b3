use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateStoreRequest, Store, UpdateStoreRequest};
use crate::common::{generate_store_id, ApiError, Validator};

pub struct StoresService {
    db: SqlitePool,
}

impl StoresService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get a store by id, scoped to its owner. A store belonging to another
    /// user is indistinguishable from a missing one.
    pub async fn get_by_id(&self, store_id: &str, user_id: &str) -> Result<Store, ApiError> {
        let store =
            sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = ? AND user_id = ?")
                .bind(store_id)
                .bind(user_id)
                .fetch_optional(&self.db)
                .await
                .map_err(ApiError::DatabaseError)?
                .ok_or_else(|| ApiError::NotFound("Store not found".to_string()))?;

        Ok(store)
    }

    /// Create a store owned by the given user
    pub async fn create(
        &self,
        user_id: &str,
        request: CreateStoreRequest,
    ) -> Result<Store, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let store_id = generate_store_id();

        sqlx::query("INSERT INTO stores (id, title, user_id) VALUES (?, ?, ?)")
            .bind(&store_id)
            .bind(&request.title)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(store_id = %store_id, user_id = %user_id, "Created store");

        self.get_by_id(&store_id, user_id).await
    }

    /// Update title and description of an owned store
    pub async fn update(
        &self,
        store_id: &str,
        user_id: &str,
        request: UpdateStoreRequest,
    ) -> Result<Store, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        // ownership check doubles as the 404 path
        self.get_by_id(store_id, user_id).await?;

        sqlx::query("UPDATE stores SET title = ?, description = ? WHERE id = ? AND user_id = ?")
            .bind(&request.title)
            .bind(&request.description)
            .bind(store_id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        self.get_by_id(store_id, user_id).await
    }

    /// Delete an owned store
    pub async fn delete(&self, store_id: &str, user_id: &str) -> Result<Store, ApiError> {
        let store = self.get_by_id(store_id, user_id).await?;

        sqlx::query("DELETE FROM stores WHERE id = ? AND user_id = ?")
            .bind(store_id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(store_id = %store_id, user_id = %user_id, "Deleted store");

        Ok(store)
    }
}
