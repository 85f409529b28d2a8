//! HTTP adapter for site-level pages.

pub mod handlers;
pub mod routes;

pub use routes::base_router;
