//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, slugs, form errors, auth)
//! - `lesson` - Projects, worksheets, further reading and link reports
//! - `changes` - Changelog entries

pub mod changes;
pub mod foundation;
pub mod lesson;
