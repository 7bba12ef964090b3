//! File upload handlers

use axum::extract::{Extension, Json, Multipart, Query};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::{UploadParams, UploadedFile};
use super::services::FilesService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// POST /api/files?folder=...
/// Accepts one or more image files in the multipart field `files` and
/// responds with their stored names and public URLs
pub async fn upload_files(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadedFile>>, ApiError> {
    let state = state_lock.read().await.clone();

    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Invalid multipart payload".to_string()))?
    {
        if field.name() != Some("files") {
            continue;
        }

        let original_name = field
            .file_name()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "file".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;

        files.push((original_name, data.to_vec()));
    }

    let stored = FilesService::new(state.uploads_dir.clone())
        .save_images(params.folder.as_deref(), files)
        .await?;

    Ok(Json(stored))
}
