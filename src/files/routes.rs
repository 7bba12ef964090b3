//! File upload routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the files router
///
/// # Routes
/// - `POST /api/files?folder=` - Upload images into a storage folder
pub fn files_routes() -> Router {
    Router::new().route("/api/files", post(handlers::upload_files))
}
