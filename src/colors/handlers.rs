//! Color handlers

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{Color, ColorRequest};
use super::services::ColorsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/colors/by-storeId/:storeId
pub async fn get_colors_by_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Color>>, ApiError> {
    let state = state_lock.read().await.clone();

    let colors = ColorsService::new(state.db.clone())
        .get_by_store(&store_id)
        .await?;

    Ok(Json(colors))
}

/// GET /api/colors/by-id/:id
pub async fn get_color_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(color_id): Path<String>,
) -> Result<Json<Color>, ApiError> {
    let state = state_lock.read().await.clone();

    let color = ColorsService::new(state.db.clone())
        .get_by_id(&color_id)
        .await?;

    Ok(Json(color))
}

/// POST /api/colors/:storeId
pub async fn create_color(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
    Json(payload): Json<ColorRequest>,
) -> Result<Json<Color>, ApiError> {
    let state = state_lock.read().await.clone();

    let color = ColorsService::new(state.db.clone())
        .create(&store_id, &authed.id, payload)
        .await?;

    Ok(Json(color))
}

/// PUT /api/colors/:id
pub async fn update_color(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(color_id): Path<String>,
    Json(payload): Json<ColorRequest>,
) -> Result<Json<Color>, ApiError> {
    let state = state_lock.read().await.clone();

    let color = ColorsService::new(state.db.clone())
        .update(&color_id, &authed.id, payload)
        .await?;

    Ok(Json(color))
}

/// DELETE /api/colors/:id
pub async fn delete_color(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(color_id): Path<String>,
) -> Result<Json<Color>, ApiError> {
    let state = state_lock.read().await.clone();

    let color = ColorsService::new(state.db.clone())
        .delete(&color_id, &authed.id)
        .await?;

    Ok(Json(color))
}
