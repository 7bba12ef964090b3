//! Authentication handlers

use axum::{
    extract::{Extension, Json, Path, Query},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::cookies;
use super::models::{AuthRequest, AuthResponse, Session};
use super::oauth::{self, OAuthProvider};
use super::service::AuthService;
use crate::common::{ApiError, AppState, Validator};

/// Attach the refresh cookie to a response carrying `{user, accessToken}`
fn session_response(state: &AppState, session: Session) -> Response {
    let cookie = cookies::build_refresh_cookie(
        &session.refresh_token,
        state.server_domain.as_deref(),
        Utc::now(),
    );

    let body = Json(AuthResponse {
        user: session.user,
        access_token: session.access_token,
    });

    with_set_cookie(body.into_response(), &cookie)
}

fn with_set_cookie(mut response: Response, cookie: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// POST /auth/login
/// Password login; refresh token delivered via Set-Cookie
///
/// # Request Body
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "..."
/// }
/// ```
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<AuthRequest>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();

    let validation = payload.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let session = AuthService::new(state.db.clone(), &state.jwt_secret)
        .login(&payload)
        .await?;

    Ok(session_response(&state, session))
}

/// POST /auth/register
/// Creates a password account and opens a session
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<AuthRequest>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();

    let validation = payload.validate(&payload);
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    let session = AuthService::new(state.db.clone(), &state.jwt_secret)
        .register(&payload)
        .await?;

    Ok(session_response(&state, session))
}

/// POST /auth/login/access-token
/// Rotates the token pair using the refresh token from the cookie.
/// A missing or failed refresh clears the cookie; the client must log in
/// again.
pub async fn refresh_tokens(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();
    let clear_cookie = cookies::build_clear_cookie(state.server_domain.as_deref());

    let refresh_token = match cookies::extract_refresh_cookie(&headers) {
        Some(token) => token,
        None => {
            warn!("Refresh rejected: no refresh token cookie");
            let response = ApiError::Unauthorized("Refresh token missing".to_string());
            return Ok(with_set_cookie(response.into_response(), &clear_cookie));
        }
    };

    match AuthService::new(state.db.clone(), &state.jwt_secret)
        .refresh(&refresh_token)
        .await
    {
        Ok(session) => Ok(session_response(&state, session)),
        // terminal for this session: clear the cookie alongside the error
        Err(err) => Ok(with_set_cookie(err.into_response(), &clear_cookie)),
    }
}

/// POST /auth/logout
/// Clears the refresh cookie; access tokens expire on their own
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();
    let clear_cookie = cookies::build_clear_cookie(state.server_domain.as_deref());

    info!("User logout: refresh cookie cleared");

    Ok(with_set_cookie(Json(true).into_response(), &clear_cookie))
}

fn parse_provider(segment: &str) -> Result<OAuthProvider, ApiError> {
    OAuthProvider::from_path(segment)
        .ok_or_else(|| ApiError::NotFound("Unknown OAuth provider".to_string()))
}

/// GET /auth/:provider
/// Redirects (302) to the provider's authorization endpoint
pub async fn oauth_start(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(provider): Path<String>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();
    let provider = parse_provider(&provider)?;

    let auth_url = state.oauth.authorize_url(provider)?;

    info!(provider = provider.as_str(), "Starting OAuth flow");

    Ok(Redirect::to(&auth_url))
}

#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// GET /auth/:provider/callback
/// Exchanges the authorization code, finds-or-creates the user, sets the
/// refresh cookie and redirects to the client with the access token as a
/// query parameter
pub async fn oauth_callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(provider): Path<String>,
    Query(params): Query<OAuthCallbackParams>,
) -> Result<Response, ApiError> {
    let state = state_lock.read().await.clone();
    let provider = parse_provider(&provider)?;

    if let Some(error) = params.error {
        warn!(provider = provider.as_str(), oauth_error = %error, "OAuth provider returned error");
        return Err(ApiError::BadRequest(format!(
            "OAuth authorization failed: {}",
            error
        )));
    }

    let code = params.code.ok_or_else(|| {
        warn!(provider = provider.as_str(), "OAuth callback without authorization code");
        ApiError::BadRequest("No authorization code provided".to_string())
    })?;

    let profile = oauth::exchange_code(&state.http, &state.oauth, provider, &code).await?;

    let session = AuthService::new(state.db.clone(), &state.jwt_secret)
        .oauth_login(&profile)
        .await?;

    let cookie = cookies::build_refresh_cookie(
        &session.refresh_token,
        state.server_domain.as_deref(),
        Utc::now(),
    );

    let target = format!(
        "{}/dashboard?accessToken={}",
        state.client_url, session.access_token
    );

    Ok(with_set_cookie(Redirect::to(&target).into_response(), &cookie))
}
