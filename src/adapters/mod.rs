//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session validation (JWT, mock)
//! - `http` - axum pages and report endpoints
//! - `link_checker` - URL reachability checks (reqwest, fixed)
//! - `memory` - In-memory stores for tests and database-less runs
//! - `pdf` - HTML to PDF rendering (wkhtmltopdf, stub)
//! - `postgres` - sqlx repositories

pub mod auth;
pub mod http;
pub mod link_checker;
pub mod memory;
pub mod pdf;
pub mod postgres;
