//! Session issuance
//!
//! Orchestrates credential validation, OAuth account linkage and the token
//! codec into access/refresh pairs. Tokens are rotated on every refresh;
//! previously issued refresh tokens stay valid until their own expiry
//! because verification is stateless.

use sqlx::SqlitePool;
use tracing::{info, warn};

use super::models::{AuthRequest, Session};
use super::oauth::OAuthProfile;
use super::password::{hash_password, verify_password};
use super::tokens::JwtCodec;
use crate::common::{safe_email_log, ApiError};
use crate::users::UsersService;

pub struct AuthService {
    users: UsersService,
    codec: JwtCodec,
}

impl AuthService {
    pub fn new(db: SqlitePool, jwt_secret: &str) -> Self {
        Self {
            users: UsersService::new(db),
            codec: JwtCodec::new(jwt_secret),
        }
    }

    /// Password login: unknown email is a 404, wrong password (or an
    /// OAuth-only account without a password) is a 401.
    pub async fn login(&self, dto: &AuthRequest) -> Result<Session, ApiError> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let verified = user
            .password_hash
            .as_deref()
            .map(|hash| verify_password(&dto.password, hash))
            .unwrap_or(false);

        if !verified {
            warn!(
                email = %safe_email_log(&dto.email),
                oauth_only = user.is_oauth_only(),
                "Login rejected: invalid credentials"
            );
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        info!(user_id = %user.id, email = %safe_email_log(&user.email), "User logged in");

        self.issue_session(user)
    }

    /// Register a new password account. The duplicate check is advisory;
    /// the users table's UNIQUE constraint settles concurrent registrations.
    pub async fn register(&self, dto: &AuthRequest) -> Result<Session, ApiError> {
        if self.users.find_by_email(&dto.email).await?.is_some() {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }

        let password_hash = hash_password(&dto.password)?;

        let user = self
            .users
            .create(
                &dto.email,
                dto.name.as_deref(),
                None,
                Some(&password_hash),
            )
            .await?;

        info!(user_id = %user.id, email = %safe_email_log(&user.email), "User registered");

        self.issue_session(user)
    }

    /// Mint a fresh token pair from a refresh token. The subject is
    /// re-resolved so deleted accounts cannot refresh.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, ApiError> {
        let subject = self.codec.verify(refresh_token).map_err(|e| {
            warn!(error = %e, "Refresh token verification failed");
            ApiError::Unauthorized("Invalid refresh token".to_string())
        })?;

        let user = self
            .users
            .find_by_id(&subject)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        self.issue_session(user)
    }

    /// Complete an OAuth login for a normalized provider profile,
    /// creating the account just-in-time on first login.
    pub async fn oauth_login(&self, profile: &OAuthProfile) -> Result<Session, ApiError> {
        let user = self.users.find_or_create_oauth(profile).await?;

        info!(
            user_id = %user.id,
            email = %safe_email_log(&user.email),
            "User authenticated via OAuth"
        );

        self.issue_session(user)
    }

    fn issue_session(&self, user: crate::users::User) -> Result<Session, ApiError> {
        let pair = self.codec.issue_pair(&user.id)?;

        Ok(Session {
            user,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }
}
