//! User routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the users router
///
/// # Routes
/// - `GET /api/users/profile` - Current authenticated user
pub fn users_routes() -> Router {
    Router::new().route("/api/users/profile", get(handlers::get_profile))
}
