//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, form validation results and error
//! types shared by the lesson and changelog domains.

mod auth;
mod errors;
pub mod form;
mod ids;
mod slug;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use form::FormErrors;
pub use ids::{EntryId, FurtherReadingId, ProjectId, SectionId, UserId, WorksheetId};
pub use slug::Slug;
pub use timestamp::Timestamp;
