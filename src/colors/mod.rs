//! # Colors Module
//!
//! Per-store color palette entries used on product pages. Same access
//! rules as categories: public reads, owner-scoped mutations.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::Color;
pub use routes::colors_routes;
pub use services::ColorsService;
