//! Changelog-specific error types.

use crate::domain::foundation::{DomainError, EntryId, ErrorCode, FormErrors};

/// Errors returned by changelog entry handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    NotFound(EntryId),
    ValidationFailed(FormErrors),
    Infrastructure(String),
}

impl EntryError {
    pub fn not_found(id: EntryId) -> Self {
        EntryError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        EntryError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EntryError::NotFound(_) => ErrorCode::EntryNotFound,
            EntryError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            EntryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            EntryError::NotFound(id) => format!("Entry not found: {}", id),
            EntryError::ValidationFailed(errors) => format!("Validation failed: {}", errors),
            EntryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EntryError {}

impl From<DomainError> for EntryError {
    fn from(err: DomainError) -> Self {
        EntryError::Infrastructure(err.to_string())
    }
}
