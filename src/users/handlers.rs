//! User profile handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::services::UsersService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/users/profile
/// Returns the current authenticated user
pub async fn get_profile(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = UsersService::new(state.db.clone())
        .find_by_id(&authed.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(serde_json::json!({ "user": user })))
}
