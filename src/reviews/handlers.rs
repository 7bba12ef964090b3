//! Review handlers

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{Review, ReviewRequest};
use super::services::ReviewsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/reviews/by-storeId/:storeId
pub async fn get_reviews_by_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let state = state_lock.read().await.clone();

    let reviews = ReviewsService::new(state.db.clone())
        .get_by_store(&store_id)
        .await?;

    Ok(Json(reviews))
}

/// GET /api/reviews/by-id/:reviewId
pub async fn get_review_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(review_id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let state = state_lock.read().await.clone();

    let review = ReviewsService::new(state.db.clone())
        .get_by_id(&review_id)
        .await?;

    Ok(Json(review))
}

/// POST /api/reviews/:productId/:storeId
pub async fn create_review(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path((product_id, store_id)): Path<(String, String)>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    let state = state_lock.read().await.clone();

    let review = ReviewsService::new(state.db.clone())
        .create(&authed.id, &product_id, &store_id, payload)
        .await?;

    Ok(Json(review))
}

/// DELETE /api/reviews/:reviewId
pub async fn delete_review(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(review_id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let state = state_lock.read().await.clone();

    let review = ReviewsService::new(state.db.clone())
        .delete(&review_id, &authed.id)
        .await?;

    Ok(Json(review))
}
