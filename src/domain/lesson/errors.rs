//! Lesson-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, FormErrors, FurtherReadingId, WorksheetId,
};

use super::WorksheetLocator;

/// Errors returned by lesson command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    /// Worksheet addressed by the route does not exist.
    WorksheetNotFound(WorksheetLocator),
    /// Worksheet with this pk does not exist.
    WorksheetIdNotFound(WorksheetId),
    /// Further reading item does not exist.
    FurtherReadingNotFound(FurtherReadingId),
    /// Submitted form did not validate.
    ValidationFailed(FormErrors),
    /// Infrastructure error.
    Infrastructure(String),
}

impl LessonError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LessonError::Infrastructure(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LessonError::WorksheetNotFound(_)
                | LessonError::WorksheetIdNotFound(_)
                | LessonError::FurtherReadingNotFound(_)
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LessonError::WorksheetNotFound(_) | LessonError::WorksheetIdNotFound(_) => {
                ErrorCode::WorksheetNotFound
            }
            LessonError::FurtherReadingNotFound(_) => ErrorCode::FurtherReadingNotFound,
            LessonError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            LessonError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            LessonError::WorksheetNotFound(loc) => format!("Worksheet not found: {}", loc),
            LessonError::WorksheetIdNotFound(id) => format!("Worksheet not found: {}", id),
            LessonError::FurtherReadingNotFound(id) => {
                format!("Further reading not found: {}", id)
            }
            LessonError::ValidationFailed(errors) => format!("Validation failed: {}", errors),
            LessonError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for LessonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LessonError {}

impl From<DomainError> for LessonError {
    fn from(err: DomainError) -> Self {
        LessonError::Infrastructure(err.to_string())
    }
}
