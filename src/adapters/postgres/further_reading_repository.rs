//! PostgreSQL implementation of FurtherReadingRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::row::get;
use crate::domain::foundation::{
    DomainError, ErrorCode, FurtherReadingId, ProjectId, WorksheetId,
};
use crate::domain::lesson::{FurtherReading, FurtherReadingInput};
use crate::ports::{FurtherReadingRepository, ProjectFurtherReading};

#[derive(Clone)]
pub struct PostgresFurtherReadingRepository {
    pool: PgPool,
}

impl PostgresFurtherReadingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a foreign key violation on `worksheet_id` to WorksheetNotFound.
fn write_error(context: &str, worksheet_id: WorksheetId, err: sqlx::Error) -> DomainError {
    let is_fk_violation = err
        .as_database_error()
        .map(|db| db.is_foreign_key_violation())
        .unwrap_or(false);
    if is_fk_violation {
        DomainError::new(
            ErrorCode::WorksheetNotFound,
            format!("Worksheet not found: {}", worksheet_id),
        )
    } else {
        DomainError::database(context, err)
    }
}

#[async_trait]
impl FurtherReadingRepository for PostgresFurtherReadingRepository {
    async fn create(
        &self,
        worksheet_id: WorksheetId,
        input: &FurtherReadingInput,
    ) -> Result<FurtherReading, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO further_readings (worksheet_id, text, link)
            VALUES ($1, $2, $3)
            RETURNING id, worksheet_id, text, link
            "#,
        )
        .bind(worksheet_id.as_i64())
        .bind(&input.text)
        .bind(&input.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Failed to insert further reading", worksheet_id, e))?;

        row_to_further_reading(&row)
    }

    async fn update(&self, item: &FurtherReading) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE further_readings SET
                worksheet_id = $2,
                text = $3,
                link = $4
            WHERE id = $1
            "#,
        )
        .bind(item.id.as_i64())
        .bind(item.worksheet_id.as_i64())
        .bind(&item.text)
        .bind(&item.link)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("Failed to update further reading", item.worksheet_id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FurtherReadingNotFound,
                format!("Further reading not found: {}", item.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: FurtherReadingId,
    ) -> Result<Option<FurtherReading>, DomainError> {
        let row = sqlx::query(
            "SELECT id, worksheet_id, text, link FROM further_readings WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch further reading", e))?;

        row.as_ref().map(row_to_further_reading).transpose()
    }

    async fn delete(&self, id: FurtherReadingId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM further_readings WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete further reading", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::FurtherReadingNotFound,
                format!("Further reading not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn list_by_worksheet(
        &self,
        worksheet_id: WorksheetId,
    ) -> Result<Vec<FurtherReading>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, worksheet_id, text, link
            FROM further_readings
            WHERE worksheet_id = $1
            ORDER BY id
            "#,
        )
        .bind(worksheet_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list further reading", e))?;

        rows.iter().map(row_to_further_reading).collect()
    }

    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ProjectFurtherReading>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.worksheet_id, f.text, f.link, w.module AS worksheet
            FROM further_readings f
            JOIN worksheets w ON w.id = f.worksheet_id
            JOIN sections s ON s.id = w.section_id
            WHERE s.project_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(project_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list project further reading", e))?;

        rows.iter()
            .map(|row| {
                Ok(ProjectFurtherReading {
                    item: row_to_further_reading(row)?,
                    worksheet: get(row, "worksheet")?,
                })
            })
            .collect()
    }
}

fn row_to_further_reading(row: &PgRow) -> Result<FurtherReading, DomainError> {
    Ok(FurtherReading {
        id: FurtherReadingId::new(get(row, "id")?),
        worksheet_id: WorksheetId::new(get(row, "worksheet_id")?),
        text: get(row, "text")?,
        link: get(row, "link")?,
    })
}
