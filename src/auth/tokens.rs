//! JWT issuance and verification
//!
//! Tokens are stateless bearer credentials: validity is fully determined by
//! the HS256 signature and the embedded expiry. There is no server-side
//! session record and no revocation list, so logout cannot invalidate an
//! access token before its natural expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::ApiError;

/// Access tokens authorize API calls and stay short-lived.
pub const ACCESS_TOKEN_TTL_HOURS: i64 = 1;

/// Refresh tokens only mint new token pairs; the refresh cookie expiry
/// matches this TTL.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Why a token failed verification. Never surfaced to HTTP callers as-is;
/// the handlers collapse all variants into a uniform 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is structurally invalid")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
}

/// Access and refresh token bound to a single user id
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies tokens with a server-held secret
#[derive(Clone)]
pub struct JwtCodec {
    secret: String,
}

impl JwtCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Sign a token for the given subject with the given time-to-live
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + ttl).timestamp() as usize,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "JWT encoding error");
            ApiError::InternalServer("jwt error".to_string())
        })
    }

    /// Issue the access + refresh pair for one user id
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, ApiError> {
        Ok(TokenPair {
            access_token: self.issue(subject, Duration::hours(ACCESS_TOKEN_TTL_HOURS))?,
            refresh_token: self.issue(subject, Duration::days(REFRESH_TOKEN_TTL_DAYS))?,
        })
    }

    /// Verify a token and return the subject id it was issued for.
    ///
    /// Pure function of token + current time + secret; no I/O.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            _ => TokenError::Malformed,
        })?;

        Ok(decoded.claims.sub)
    }
}
