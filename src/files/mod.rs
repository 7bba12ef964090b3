//! # Files Module
//!
//! Image upload endpoint backing product image management. Files land on
//! local disk under the configured uploads directory and are served back
//! under `/uploads`.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::files_routes;
pub use services::FilesService;
