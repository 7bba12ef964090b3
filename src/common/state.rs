// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::path::PathBuf;

use crate::auth::oauth::OAuthSettings;

/// Application state containing database pool, HTTP client, and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub jwt_secret: String,
    /// Domain the refresh cookie is scoped to (SERVER_DOMAIN)
    pub server_domain: Option<String>,
    /// Front-end origin that OAuth callbacks redirect back to (CLIENT_URL)
    pub client_url: String,
    pub uploads_dir: PathBuf,
    pub oauth: OAuthSettings,
}
