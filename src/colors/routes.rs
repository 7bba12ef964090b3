//! Color routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the colors router
///
/// # Routes
/// - `GET /api/colors/by-storeId/:storeId` - Store colors
/// - `GET /api/colors/by-id/:id` - Single color
/// - `POST /api/colors/:storeId` - Create in an owned store
/// - `PUT /api/colors/:id` - Update
/// - `DELETE /api/colors/:id` - Delete
pub fn colors_routes() -> Router {
    Router::new()
        .route(
            "/api/colors/by-storeId/:storeId",
            get(handlers::get_colors_by_store),
        )
        .route("/api/colors/by-id/:id", get(handlers::get_color_by_id))
        // POST takes a store id, PUT/DELETE a color id; same path position
        .route(
            "/api/colors/:id",
            post(handlers::create_color)
                .put(handlers::update_color)
                .delete(handlers::delete_color),
        )
}
