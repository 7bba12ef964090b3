//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Password login and registration
//! - Google / Yandex OAuth login with just-in-time user creation
//! - JWT access/refresh token issuance and rotation
//! - HTTP-only refresh cookie handling
//! - AuthedUser extractor for protected routes

pub mod cookies;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod oauth;
pub mod password;
pub mod routes;
pub mod service;
pub mod tokens;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
