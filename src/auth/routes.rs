//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /auth/login` - Password login
/// - `POST /auth/register` - Account registration
/// - `POST /auth/login/access-token` - Token refresh from cookie
/// - `POST /auth/logout` - Clear the refresh cookie
/// - `GET /auth/:provider` - Start an OAuth flow (google, yandex)
/// - `GET /auth/:provider/callback` - OAuth provider callback
pub fn auth_routes() -> Router {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/auth/login/access-token", post(handlers::refresh_tokens))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/:provider", get(handlers::oauth_start))
        .route("/auth/:provider/callback", get(handlers::oauth_callback))
}
