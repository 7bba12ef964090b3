//! Product routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the products router
///
/// # Routes
/// - `GET /api/products` - Public listing with optional `searchTerm`
/// - `GET /api/products/by-storeId/:storeId` - Store dashboard listing
/// - `GET /api/products/by-id/:id` - Single product
/// - `GET /api/products/by-category/:categoryId` - Category listing
/// - `GET /api/products/most-popular` - Ranked by order count
/// - `GET /api/products/similar/:id` - Same-category products
/// - `POST /api/products/:storeId` - Create in an owned store
/// - `PUT /api/products/:productId` - Update
/// - `DELETE /api/products/:productId` - Delete
pub fn products_routes() -> Router {
    Router::new()
        .route("/api/products", get(handlers::get_all_products))
        .route(
            "/api/products/by-storeId/:storeId",
            get(handlers::get_products_by_store),
        )
        .route("/api/products/by-id/:id", get(handlers::get_product_by_id))
        .route(
            "/api/products/by-category/:categoryId",
            get(handlers::get_products_by_category),
        )
        .route(
            "/api/products/most-popular",
            get(handlers::get_most_popular_products),
        )
        .route(
            "/api/products/similar/:id",
            get(handlers::get_similar_products),
        )
        // POST takes a store id, PUT/DELETE a product id; same path position
        .route(
            "/api/products/:id",
            post(handlers::create_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}
