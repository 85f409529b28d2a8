//! Strongly-typed identifier value objects.
//!
//! Row identifiers are database-assigned integers. Wrapping them keeps a
//! worksheet pk from being passed where a further-reading pk is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw primary key.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw primary key.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            /// Accepts decimal digits only, like a `\d+` route segment.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ValidationError::invalid_format("pk", "expected digits"));
                }
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format("pk", e.to_string()))
            }
        }
    };
}

row_id!(
    /// Primary key of a project.
    ProjectId
);
row_id!(
    /// Primary key of a lesson section.
    SectionId
);
row_id!(
    /// Primary key of a worksheet.
    WorksheetId
);
row_id!(
    /// Primary key of a further reading item.
    FurtherReadingId
);
row_id!(
    /// Primary key of a changelog entry.
    EntryId
);

/// User identifier (from auth provider, not UUID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
