//! # Users Module
//!
//! User account storage and the current-user profile endpoint:
//! - lookup by email / id, creation with a unique-email guarantee
//! - just-in-time creation for first OAuth logins

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::User;
pub use routes::users_routes;
pub use services::UsersService;
