//! # Categories Module
//!
//! Per-store product categories. Reads are keyed by store or category id;
//! mutations require ownership of the containing store.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use models::Category;
pub use routes::categories_routes;
pub use services::CategoriesService;
