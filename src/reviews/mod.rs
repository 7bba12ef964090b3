//! # Reviews Module
//!
//! Product reviews left by authenticated customers. Deletion is
//! author-scoped; store owners moderate through their own dashboards.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::Review;
pub use routes::reviews_routes;
pub use services::ReviewsService;
