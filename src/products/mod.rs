//! # Products Module
//!
//! Public catalog reads (listing, search, category, popularity, similar
//! products) plus owner-scoped product management for store dashboards.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use models::Product;
pub use routes::products_routes;
pub use services::ProductsService;
