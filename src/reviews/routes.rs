//! Review routes

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers;

/// Creates and returns the reviews router
///
/// # Routes
/// - `GET /api/reviews/by-storeId/:storeId` - Store reviews
/// - `GET /api/reviews/by-id/:reviewId` - Single review
/// - `POST /api/reviews/:productId/:storeId` - Leave a review
/// - `DELETE /api/reviews/:reviewId` - Delete own review
pub fn reviews_routes() -> Router {
    Router::new()
        .route(
            "/api/reviews/by-storeId/:storeId",
            get(handlers::get_reviews_by_store),
        )
        .route(
            "/api/reviews/by-id/:reviewId",
            get(handlers::get_review_by_id),
        )
        // POST takes product + store ids, DELETE a review id
        .route("/api/reviews/:id/:storeId", post(handlers::create_review))
        .route("/api/reviews/:id", delete(handlers::delete_review))
}
