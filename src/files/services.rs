use chrono::Utc;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::info;

use super::models::UploadedFile;
use crate::common::ApiError;

const DEFAULT_FOLDER: &str = "products";

pub struct FilesService {
    uploads_dir: PathBuf,
}

impl FilesService {
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// Store a batch of image files under `{uploads_dir}/{folder}`,
    /// writing them concurrently. Every file must be a real image;
    /// one bad file fails the whole batch before anything is written.
    pub async fn save_images(
        &self,
        folder: Option<&str>,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<Vec<UploadedFile>, ApiError> {
        if files.is_empty() {
            return Err(ApiError::BadRequest("No files provided".to_string()));
        }

        let folder = sanitize_folder(folder)?;

        for (name, data) in &files {
            if !is_valid_image_type(data) {
                return Err(ApiError::BadRequest(format!(
                    "File is not a supported image: {}",
                    name
                )));
            }
        }

        let target_dir = self.uploads_dir.join(&folder);
        tokio::fs::create_dir_all(&target_dir)
            .await
            .map_err(|_| ApiError::InternalServer("Failed to create upload folder".to_string()))?;

        let timestamp = Utc::now().timestamp_millis();

        let writes = files.into_iter().map(|(original, data)| {
            let stored_name = format!("{}-{}", timestamp, sanitize_filename(&original));
            let path = target_dir.join(&stored_name);
            let url = format!("/uploads/{}/{}", folder, stored_name);

            async move {
                tokio::fs::write(&path, data).await.map_err(|_| {
                    ApiError::InternalServer("Failed to store uploaded file".to_string())
                })?;

                Ok::<UploadedFile, ApiError>(UploadedFile {
                    name: stored_name,
                    url,
                })
            }
        });

        let stored = try_join_all(writes).await?;

        info!(
            folder = %folder,
            count = stored.len(),
            "Stored uploaded files"
        );

        Ok(stored)
    }
}

/// Restrict folders to a single plain path segment
fn sanitize_folder(folder: Option<&str>) -> Result<String, ApiError> {
    let folder = match folder.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => f,
        None => return Ok(DEFAULT_FOLDER.to_string()),
    };

    let valid = folder
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(folder.to_string())
    } else {
        Err(ApiError::BadRequest("Invalid folder name".to_string()))
    }
}

/// Keep only the base name of the client-supplied filename
fn sanitize_filename(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file");

    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn is_valid_image_type(data: &[u8]) -> bool {
    let infer = infer::Infer::new();
    if let Some(info) = infer.get(data) {
        matches!(
            info.mime_type(),
            "image/png" | "image/jpeg" | "image/gif" | "image/webp"
        )
    } else {
        false
    }
}

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn test_sanitize_folder() {
        assert_eq!(sanitize_folder(None).unwrap(), "products");
        assert_eq!(sanitize_folder(Some("  ")).unwrap(), "products");
        assert_eq!(sanitize_folder(Some("banners")).unwrap(), "banners");
        assert!(sanitize_folder(Some("../etc")).is_err());
        assert!(sanitize_folder(Some("a/b")).is_err());
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("photo.png"), "photo.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
    }
}
