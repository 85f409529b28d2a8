//! HTTP adapter for lesson pages.
//!
//! Worksheet detail, further reading create/update/delete and the invalid
//! further reading report in JSON and PDF form.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::lesson_router;
