//! Store handlers

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{CreateStoreRequest, Store, UpdateStoreRequest};
use super::services::StoresService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/stores/by-id/:id
pub async fn get_store_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Store>, ApiError> {
    let state = state_lock.read().await.clone();

    let store = StoresService::new(state.db.clone())
        .get_by_id(&store_id, &authed.id)
        .await?;

    Ok(Json(store))
}

/// POST /api/stores
pub async fn create_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<CreateStoreRequest>,
) -> Result<Json<Store>, ApiError> {
    let state = state_lock.read().await.clone();

    let store = StoresService::new(state.db.clone())
        .create(&authed.id, payload)
        .await?;

    Ok(Json(store))
}

/// PUT /api/stores/:id
pub async fn update_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
    Json(payload): Json<UpdateStoreRequest>,
) -> Result<Json<Store>, ApiError> {
    let state = state_lock.read().await.clone();

    let store = StoresService::new(state.db.clone())
        .update(&store_id, &authed.id, payload)
        .await?;

    Ok(Json(store))
}

/// DELETE /api/stores/:id
pub async fn delete_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Store>, ApiError> {
    let state = state_lock.read().await.clone();

    let store = StoresService::new(state.db.clone())
        .delete(&store_id, &authed.id)
        .await?;

    Ok(Json(store))
}
