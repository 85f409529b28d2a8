//! Projecta - Lessons content management
//!
//! Server-rendered pages for maintaining worksheet further reading and a
//! changelog, plus an audit of further reading links that can be printed
//! to PDF.
//!
//! # Layout
//!
//! - `domain` - Records, forms and their validation
//! - `ports` - Storage and service interfaces
//! - `application` - Command and query handlers
//! - `adapters` - axum, sqlx, reqwest, wkhtmltopdf and in-memory implementations
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
