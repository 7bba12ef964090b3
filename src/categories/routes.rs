//! Category routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the categories router
///
/// # Routes
/// - `GET /api/categories/by-storeId/:storeId` - Store categories
/// - `GET /api/categories/by-id/:id` - Single category
/// - `POST /api/categories/:storeId` - Create in an owned store
/// - `PUT /api/categories/:id` - Update
/// - `DELETE /api/categories/:id` - Delete
pub fn categories_routes() -> Router {
    Router::new()
        .route(
            "/api/categories/by-storeId/:storeId",
            get(handlers::get_categories_by_store),
        )
        .route(
            "/api/categories/by-id/:id",
            get(handlers::get_category_by_id),
        )
        // POST takes a store id, PUT/DELETE a category id; same path position
        .route(
            "/api/categories/:id",
            post(handlers::create_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
}
