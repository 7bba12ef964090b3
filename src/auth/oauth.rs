//! OAuth identity provider bridge
//!
//! One small dispatch over supported providers: build the authorization
//! redirect, exchange the callback code for an access token, and normalize
//! the provider's userinfo payload into a common `OAuthProfile`.

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, warn};

use crate::common::ApiError;

/// Supported third-party identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Yandex,
}

impl OAuthProvider {
    /// Parse the `:provider` path segment of /auth/:provider routes
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "google" => Some(OAuthProvider::Google),
            "yandex" => Some(OAuthProvider::Yandex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Yandex => "yandex",
        }
    }

    fn token_endpoint(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://oauth2.googleapis.com/token",
            OAuthProvider::Yandex => "https://oauth.yandex.ru/token",
        }
    }
}

/// Provider-supplied identity, normalized across providers.
/// Transient: only used to find-or-create a user, never persisted directly.
#[derive(Debug, Clone)]
pub struct OAuthProfile {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// OAuth configuration loaded from the environment
#[derive(Clone, Debug)]
pub struct OAuthSettings {
    /// Public base URL of this server, used to build callback redirect URIs
    pub server_url: String,
    pub google: Option<ProviderCredentials>,
    pub yandex: Option<ProviderCredentials>,
}

impl OAuthSettings {
    pub fn from_env() -> Self {
        let read = |id_var: &str, secret_var: &str| {
            match (std::env::var(id_var), std::env::var(secret_var)) {
                (Ok(client_id), Ok(client_secret)) => Some(ProviderCredentials {
                    client_id,
                    client_secret,
                }),
                _ => None,
            }
        };

        Self {
            server_url: std::env::var("SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            google: read("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            yandex: read("YANDEX_CLIENT_ID", "YANDEX_CLIENT_SECRET"),
        }
    }

    fn credentials(&self, provider: OAuthProvider) -> Result<&ProviderCredentials, ApiError> {
        let creds = match provider {
            OAuthProvider::Google => self.google.as_ref(),
            OAuthProvider::Yandex => self.yandex.as_ref(),
        };

        creds.ok_or_else(|| {
            warn!(provider = provider.as_str(), "OAuth provider not configured");
            ApiError::InternalServer(format!(
                "{} OAuth is not configured",
                provider.as_str()
            ))
        })
    }

    /// Callback URI registered with the provider
    pub fn redirect_uri(&self, provider: OAuthProvider) -> String {
        format!("{}/auth/{}/callback", self.server_url, provider.as_str())
    }

    /// Authorization endpoint URL the client gets redirected to
    pub fn authorize_url(&self, provider: OAuthProvider) -> Result<String, ApiError> {
        let creds = self.credentials(provider)?;
        let redirect_uri = self.redirect_uri(provider);

        let url = match provider {
            OAuthProvider::Google => format!(
                "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline",
                urlencoding::encode(&creds.client_id),
                urlencoding::encode(&redirect_uri),
                urlencoding::encode("openid email profile"),
            ),
            OAuthProvider::Yandex => format!(
                "https://oauth.yandex.ru/authorize?response_type=code&client_id={}&redirect_uri={}",
                urlencoding::encode(&creds.client_id),
                urlencoding::encode(&redirect_uri),
            ),
        };

        Ok(url)
    }
}

#[derive(serde::Serialize)]
struct TokenRequest {
    grant_type: String,
    code: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

#[derive(Deserialize)]
struct YandexUserInfo {
    default_email: Option<String>,
    real_name: Option<String>,
    display_name: Option<String>,
    is_avatar_empty: Option<bool>,
    default_avatar_id: Option<String>,
}

/// Exchange an authorization code for the provider's access token and
/// fetch + normalize the user profile
pub async fn exchange_code(
    http: &Client,
    settings: &OAuthSettings,
    provider: OAuthProvider,
    code: &str,
) -> Result<OAuthProfile, ApiError> {
    let creds = settings.credentials(provider)?;

    let token_response = http
        .post(provider.token_endpoint())
        .form(&TokenRequest {
            grant_type: "authorization_code".to_string(),
            code: code.to_string(),
            client_id: creds.client_id.clone(),
            client_secret: creds.client_secret.clone(),
            redirect_uri: settings.redirect_uri(provider),
        })
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, provider = provider.as_str(), "OAuth token exchange request failed");
            ApiError::InternalServer("OAuth token exchange failed".to_string())
        })?;

    if !token_response.status().is_success() {
        let status = token_response.status();
        let body = token_response.text().await.unwrap_or_default();
        warn!(
            http_status = %status,
            body = %body,
            provider = provider.as_str(),
            "OAuth provider rejected the authorization code"
        );
        return Err(ApiError::BadRequest(
            "invalid or expired authorization code".to_string(),
        ));
    }

    let tokens: TokenResponse = token_response.json().await.map_err(|e| {
        error!(error = %e, provider = provider.as_str(), "Malformed OAuth token response");
        ApiError::InternalServer("malformed OAuth token response".to_string())
    })?;

    fetch_profile(http, provider, &tokens.access_token).await
}

async fn fetch_profile(
    http: &Client,
    provider: OAuthProvider,
    access_token: &str,
) -> Result<OAuthProfile, ApiError> {
    match provider {
        OAuthProvider::Google => {
            let info: GoogleUserInfo = http
                .get("https://www.googleapis.com/oauth2/v2/userinfo")
                .bearer_auth(access_token)
                .send()
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to fetch Google userinfo");
                    ApiError::InternalServer("failed to fetch user profile".to_string())
                })?
                .json()
                .await
                .map_err(|e| {
                    error!(error = %e, "Malformed Google userinfo response");
                    ApiError::InternalServer("malformed user profile response".to_string())
                })?;

            normalize_google(info)
        }
        OAuthProvider::Yandex => {
            // Yandex expects "Authorization: OAuth <token>"
            let info: YandexUserInfo = http
                .get("https://login.yandex.ru/info?format=json")
                .header("Authorization", format!("OAuth {}", access_token))
                .send()
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to fetch Yandex userinfo");
                    ApiError::InternalServer("failed to fetch user profile".to_string())
                })?
                .json()
                .await
                .map_err(|e| {
                    error!(error = %e, "Malformed Yandex userinfo response");
                    ApiError::InternalServer("malformed user profile response".to_string())
                })?;

            normalize_yandex(info)
        }
    }
}

fn normalize_google(info: GoogleUserInfo) -> Result<OAuthProfile, ApiError> {
    let email = info.email.ok_or_else(|| {
        warn!("Google profile missing email field");
        ApiError::BadRequest("provider profile missing email".to_string())
    })?;

    Ok(OAuthProfile {
        email,
        name: info.name,
        picture: info.picture,
    })
}

fn normalize_yandex(info: YandexUserInfo) -> Result<OAuthProfile, ApiError> {
    let email = info.default_email.ok_or_else(|| {
        warn!("Yandex profile missing default_email field");
        ApiError::BadRequest("provider profile missing email".to_string())
    })?;

    // real_name is the curated full name; display_name is the login fallback
    let name = info.real_name.or(info.display_name);

    let picture = match (info.is_avatar_empty, info.default_avatar_id) {
        (Some(false) | None, Some(avatar_id)) => Some(format!(
            "https://avatars.yandex.net/get-yapic/{}/islands-200",
            avatar_id
        )),
        _ => None,
    };

    Ok(OAuthProfile {
        email,
        name,
        picture,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_path() {
        assert_eq!(OAuthProvider::from_path("google"), Some(OAuthProvider::Google));
        assert_eq!(OAuthProvider::from_path("yandex"), Some(OAuthProvider::Yandex));
        assert_eq!(OAuthProvider::from_path("github"), None);
    }

    #[test]
    fn test_normalize_google_full_profile() {
        let profile = normalize_google(GoogleUserInfo {
            email: Some("user@example.com".to_string()),
            name: Some("User Name".to_string()),
            picture: Some("https://example.com/p.jpg".to_string()),
        })
        .unwrap();

        assert_eq!(profile.email, "user@example.com");
        assert_eq!(profile.name.as_deref(), Some("User Name"));
        assert_eq!(profile.picture.as_deref(), Some("https://example.com/p.jpg"));
    }

    #[test]
    fn test_normalize_google_tolerates_missing_optionals() {
        let profile = normalize_google(GoogleUserInfo {
            email: Some("user@example.com".to_string()),
            name: None,
            picture: None,
        })
        .unwrap();

        assert_eq!(profile.email, "user@example.com");
        assert!(profile.name.is_none());
        assert!(profile.picture.is_none());
    }

    #[test]
    fn test_normalize_google_requires_email() {
        let result = normalize_google(GoogleUserInfo {
            email: None,
            name: Some("No Email".to_string()),
            picture: None,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_yandex_builds_avatar_url() {
        let profile = normalize_yandex(YandexUserInfo {
            default_email: Some("user@yandex.ru".to_string()),
            real_name: Some("Real Name".to_string()),
            display_name: Some("login".to_string()),
            is_avatar_empty: Some(false),
            default_avatar_id: Some("12345/abc".to_string()),
        })
        .unwrap();

        assert_eq!(profile.name.as_deref(), Some("Real Name"));
        assert_eq!(
            profile.picture.as_deref(),
            Some("https://avatars.yandex.net/get-yapic/12345/abc/islands-200")
        );
    }

    #[test]
    fn test_normalize_yandex_empty_avatar_and_name_fallback() {
        let profile = normalize_yandex(YandexUserInfo {
            default_email: Some("user@yandex.ru".to_string()),
            real_name: None,
            display_name: Some("login".to_string()),
            is_avatar_empty: Some(true),
            default_avatar_id: Some("0/0-0".to_string()),
        })
        .unwrap();

        assert_eq!(profile.name.as_deref(), Some("login"));
        assert!(profile.picture.is_none());
    }

    #[test]
    fn test_authorize_url_contains_callback() {
        let settings = OAuthSettings {
            server_url: "https://api.shop.test".to_string(),
            google: Some(ProviderCredentials {
                client_id: "gid".to_string(),
                client_secret: "gsecret".to_string(),
            }),
            yandex: None,
        };

        let url = settings.authorize_url(OAuthProvider::Google).unwrap();
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=gid"));
        assert!(url.contains(&urlencoding::encode(
            "https://api.shop.test/auth/google/callback"
        ).into_owned()));

        // unconfigured provider is an internal error, not a panic
        assert!(settings.authorize_url(OAuthProvider::Yandex).is_err());
    }
}
