//! Product handlers

use axum::extract::{Extension, Json, Path, Query};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{Product, ProductRequest, ProductSearchParams};
use super::services::ProductsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/products
/// Public catalog listing, optionally filtered by `searchTerm`
pub async fn get_all_products(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<ProductSearchParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let state = state_lock.read().await.clone();

    let products = ProductsService::new(state.db.clone())
        .get_all(params.search_term.as_deref())
        .await?;

    Ok(Json(products))
}

/// GET /api/products/by-storeId/:storeId
pub async fn get_products_by_store(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let state = state_lock.read().await.clone();

    let products = ProductsService::new(state.db.clone())
        .get_by_store(&store_id)
        .await?;

    Ok(Json(products))
}

/// GET /api/products/by-id/:id
pub async fn get_product_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let state = state_lock.read().await.clone();

    let product = ProductsService::new(state.db.clone())
        .get_by_id(&product_id)
        .await?;

    Ok(Json(product))
}

/// GET /api/products/by-category/:categoryId
pub async fn get_products_by_category(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let state = state_lock.read().await.clone();

    let products = ProductsService::new(state.db.clone())
        .get_by_category(&category_id)
        .await?;

    Ok(Json(products))
}

/// GET /api/products/most-popular
pub async fn get_most_popular_products(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let state = state_lock.read().await.clone();

    let products = ProductsService::new(state.db.clone())
        .get_most_popular()
        .await?;

    Ok(Json(products))
}

/// GET /api/products/similar/:id
pub async fn get_similar_products(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(product_id): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let state = state_lock.read().await.clone();

    let products = ProductsService::new(state.db.clone())
        .get_similar(&product_id)
        .await?;

    Ok(Json(products))
}

/// POST /api/products/:storeId
pub async fn create_product(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(store_id): Path<String>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let state = state_lock.read().await.clone();

    let product = ProductsService::new(state.db.clone())
        .create(&store_id, &authed.id, payload)
        .await?;

    Ok(Json(product))
}

/// PUT /api/products/:productId
pub async fn update_product(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(product_id): Path<String>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let state = state_lock.read().await.clone();

    let product = ProductsService::new(state.db.clone())
        .update(&product_id, &authed.id, payload)
        .await?;

    Ok(Json(product))
}

/// DELETE /api/products/:productId
pub async fn delete_product(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let state = state_lock.read().await.clone();

    let product = ProductsService::new(state.db.clone())
        .delete(&product_id, &authed.id)
        .await?;

    Ok(Json(product))
}
