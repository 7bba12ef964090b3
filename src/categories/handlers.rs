//! Category handlers

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{Category, CategoryRequest};
use super::services::CategoriesService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/categories/by-storeId/:storeId
pub async fn get_categories_by_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let state = state_lock.read().await.clone();

    let categories = CategoriesService::new(state.db.clone())
        .get_by_store(&store_id)
        .await?;

    Ok(Json(categories))
}

/// GET /api/categories/by-id/:id
pub async fn get_category_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let state = state_lock.read().await.clone();

    let category = CategoriesService::new(state.db.clone())
        .get_by_id(&category_id)
        .await?;

    Ok(Json(category))
}

/// POST /api/categories/:storeId
pub async fn create_category(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let state = state_lock.read().await.clone();

    let category = CategoriesService::new(state.db.clone())
        .create(&store_id, &authed.id, payload)
        .await?;

    Ok(Json(category))
}

/// PUT /api/categories/:id
pub async fn update_category(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(category_id): Path<String>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let state = state_lock.read().await.clone();

    let category = CategoriesService::new(state.db.clone())
        .update(&category_id, &authed.id, payload)
        .await?;

    Ok(Json(category))
}

/// DELETE /api/categories/:id
pub async fn delete_category(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(category_id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let state = state_lock.read().await.clone();

    let category = CategoriesService::new(state.db.clone())
        .delete(&category_id, &authed.id)
        .await?;

    Ok(Json(category))
}
