//! HTTP adapter for changelog entry pages.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::changes_router;
