use sqlx::SqlitePool;
use tracing::info;

use super::models::{Product, ProductRequest};
use crate::common::{generate_product_id, ApiError, Validator};

pub struct ProductsService {
    db: SqlitePool,
}

impl ProductsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Public listing with an optional search term matched against title
    /// and description
    pub async fn get_all(&self, search_term: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let products = match search_term.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Product>(
                    r#"
                    SELECT * FROM products
                    WHERE title LIKE ? OR description LIKE ?
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.db)
                .await
            }
            None => {
                sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
                    .fetch_all(&self.db)
                    .await
            }
        }
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// All products of a store, for the store dashboard
    pub async fn get_by_store(&self, store_id: &str) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE store_id = ? ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    pub async fn get_by_id(&self, product_id: &str) -> Result<Product, ApiError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

        Ok(product)
    }

    pub async fn get_by_category(&self, category_id: &str) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category_id = ? ORDER BY created_at DESC",
        )
        .bind(category_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// Products ranked by how often they appear in order items
    pub async fn get_most_popular(&self) -> Result<Vec<Product>, ApiError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.* FROM products p
            JOIN order_items oi ON oi.product_id = p.id
            GROUP BY p.id
            ORDER BY COUNT(oi.id) DESC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// Products sharing the given product's category title, oldest first.
    /// A product without a category has no similar products.
    pub async fn get_similar(&self, product_id: &str) -> Result<Vec<Product>, ApiError> {
        let current = self.get_by_id(product_id).await?;

        let category_id = match current.category_id.as_deref() {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.* FROM products p
            JOIN categories c ON c.id = p.category_id
            WHERE c.title = (SELECT title FROM categories WHERE id = ?)
              AND p.id != ?
            ORDER BY p.created_at ASC
            "#,
        )
        .bind(category_id)
        .bind(product_id)
        .fetch_all(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        Ok(products)
    }

    /// Create a product in a store owned by the given user
    pub async fn create(
        &self,
        store_id: &str,
        user_id: &str,
        request: ProductRequest,
    ) -> Result<Product, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        self.assert_store_owned(store_id, user_id).await?;

        let product_id = generate_product_id();
        let images_json = serde_json::to_string(&request.images)
            .map_err(|_| ApiError::BadRequest("Invalid images payload".to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, price, images, store_id, category_id, color_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.price)
        .bind(&images_json)
        .bind(store_id)
        .bind(&request.category_id)
        .bind(&request.color_id)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        info!(product_id = %product_id, store_id = %store_id, "Created product");

        self.get_by_id(&product_id).await
    }

    /// Update a product in a store owned by the given user
    pub async fn update(
        &self,
        product_id: &str,
        user_id: &str,
        request: ProductRequest,
    ) -> Result<Product, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let product = self.get_by_id(product_id).await?;
        self.assert_store_owned(&product.store_id, user_id).await?;

        let images_json = serde_json::to_string(&request.images)
            .map_err(|_| ApiError::BadRequest("Invalid images payload".to_string()))?;

        sqlx::query(
            r#"
            UPDATE products
            SET title = ?, description = ?, price = ?, images = ?, category_id = ?, color_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.price)
        .bind(&images_json)
        .bind(&request.category_id)
        .bind(&request.color_id)
        .bind(product_id)
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        self.get_by_id(product_id).await
    }

    /// Delete a product in a store owned by the given user
    pub async fn delete(&self, product_id: &str, user_id: &str) -> Result<Product, ApiError> {
        let product = self.get_by_id(product_id).await?;
        self.assert_store_owned(&product.store_id, user_id).await?;

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        info!(product_id = %product_id, "Deleted product");

        Ok(product)
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
