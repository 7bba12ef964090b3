//! Refresh-token cookie handling
//!
//! The refresh token travels exclusively in an HTTP-only cookie. SameSite
//! stays None because the OAuth callback is a cross-site redirect and still
//! has to deliver the cookie back to the origin (None requires Secure).

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};

use super::tokens::REFRESH_TOKEN_TTL_DAYS;

/// Cookie name the front end and refresh endpoint agree on
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Build the Set-Cookie value carrying a refresh token.
/// Expiry matches the refresh token's own TTL.
pub fn build_refresh_cookie(token: &str, domain: Option<&str>, now: DateTime<Utc>) -> String {
    let ttl = Duration::days(REFRESH_TOKEN_TTL_DAYS);
    let expires = now + ttl;

    let mut cookie = format!("{}={}", REFRESH_TOKEN_COOKIE, token);
    cookie.push_str("; HttpOnly");
    cookie.push_str("; Secure");
    cookie.push_str("; SameSite=None");
    cookie.push_str("; Path=/");
    if let Some(domain) = domain {
        cookie.push_str(&format!("; Domain={}", domain));
    }
    cookie.push_str(&format!(
        "; Expires={}",
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    ));
    cookie.push_str(&format!("; Max-Age={}", ttl.num_seconds()));

    cookie
}

/// Build the Set-Cookie value that clears the refresh cookie
/// (empty value, epoch expiry). Used on logout and failed refresh.
pub fn build_clear_cookie(domain: Option<&str>) -> String {
    let mut cookie = format!("{}=", REFRESH_TOKEN_COOKIE);
    cookie.push_str("; HttpOnly");
    cookie.push_str("; Secure");
    cookie.push_str("; SameSite=None");
    cookie.push_str("; Path=/");
    if let Some(domain) = domain {
        cookie.push_str(&format!("; Domain={}", domain));
    }
    cookie.push_str("; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0");

    cookie
}

/// Extract the refresh token from the request's Cookie header
pub fn extract_refresh_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == REFRESH_TOKEN_COOKIE {
                Some(value.to_string())
            } else {
                None
            }
        })
}
