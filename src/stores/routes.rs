//! Store routes

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers;

/// Creates and returns the stores router
///
/// # Routes
/// - `GET /api/stores/by-id/:id` - Get an owned store
/// - `POST /api/stores` - Create a store
/// - `PUT /api/stores/:id` - Update an owned store
/// - `DELETE /api/stores/:id` - Delete an owned store
pub fn stores_routes() -> Router {
    Router::new()
        .route("/api/stores/by-id/:id", get(handlers::get_store_by_id))
        .route("/api/stores", post(handlers::create_store))
        .route(
            "/api/stores/:id",
            put(handlers::update_store).delete(handlers::delete_store),
        )
}
