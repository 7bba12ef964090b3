//! # Stores Module
//!
//! Owner-scoped store management. Every operation is keyed by both the
//! store id and the authenticated user's id, so one user can never read
//! or mutate another user's store.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::Store;
pub use routes::stores_routes;
pub use services::StoresService;
