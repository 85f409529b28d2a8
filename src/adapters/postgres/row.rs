//! Row decoding helpers shared by the PostgreSQL adapters.

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode, Slug};

/// Reads a column, turning decode failures into `DatabaseError`.
pub(crate) fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", column, e),
        )
    })
}

/// Reads a slug column. Stored slugs that no longer validate are data errors.
pub(crate) fn get_slug(row: &PgRow, column: &str) -> Result<Slug, DomainError> {
    let raw: String = get(row, column)?;
    Slug::new(&raw).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid {} '{}': {}", column, raw, e),
        )
    })
}
