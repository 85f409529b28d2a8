//! PostgreSQL implementation of LessonReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::row::{get, get_slug};
use crate::domain::foundation::{DomainError, ProjectId, SectionId, WorksheetId};
use crate::domain::lesson::{Project, Worksheet, WorksheetContext, WorksheetLocator};
use crate::ports::LessonReader;

const WORKSHEET_CONTEXT_SELECT: &str = r#"
    SELECT w.id, w.section_id, w.module, w.slug,
           s.slug AS section_slug, p.slug AS project_slug, p.name AS project_name
    FROM worksheets w
    JOIN sections s ON s.id = w.section_id
    JOIN projects p ON p.id = s.project_id
"#;

#[derive(Clone)]
pub struct PostgresLessonReader {
    pool: PgPool,
}

impl PostgresLessonReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LessonReader for PostgresLessonReader {
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query("SELECT id, name, slug FROM projects ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list projects", e))?;

        rows.iter().map(row_to_project).collect()
    }

    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query("SELECT id, name, slug FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch project", e))?;

        row.as_ref().map(row_to_project).transpose()
    }

    async fn find_worksheet(
        &self,
        locator: &WorksheetLocator,
    ) -> Result<Option<WorksheetContext>, DomainError> {
        let sql = format!(
            "{} WHERE p.slug = $1 AND s.slug = $2 AND w.slug = $3",
            WORKSHEET_CONTEXT_SELECT
        );
        let row = sqlx::query(&sql)
            .bind(&locator.project_slug)
            .bind(&locator.section_slug)
            .bind(&locator.worksheet_slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch worksheet", e))?;

        row.as_ref().map(row_to_context).transpose()
    }

    async fn find_worksheet_by_id(
        &self,
        id: WorksheetId,
    ) -> Result<Option<WorksheetContext>, DomainError> {
        let sql = format!("{} WHERE w.id = $1", WORKSHEET_CONTEXT_SELECT);
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch worksheet", e))?;

        row.as_ref().map(row_to_context).transpose()
    }
}

fn row_to_project(row: &PgRow) -> Result<Project, DomainError> {
    Ok(Project {
        id: ProjectId::new(get(row, "id")?),
        name: get(row, "name")?,
        slug: get_slug(row, "slug")?,
    })
}

fn row_to_context(row: &PgRow) -> Result<WorksheetContext, DomainError> {
    Ok(WorksheetContext {
        worksheet: Worksheet {
            id: WorksheetId::new(get(row, "id")?),
            section_id: SectionId::new(get(row, "section_id")?),
            module: get(row, "module")?,
            slug: get_slug(row, "slug")?,
        },
        section_slug: get_slug(row, "section_slug")?,
        project_slug: get_slug(row, "project_slug")?,
        project_name: get(row, "project_name")?,
    })
}
