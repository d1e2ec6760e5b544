//! HTTP request handlers.

pub mod health_handler;
pub mod voter_handler;

pub use health_handler::health_routes;
pub use voter_handler::voter_routes;
