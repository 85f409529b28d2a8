//! Lesson reader port (read side).
//!
//! Projects, sections and worksheets are looked up, never written, by this
//! service. Every miss is `Ok(None)`; callers decide whether that is a 404
//! or a soft failure.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WorksheetId};
use crate::domain::lesson::{Project, WorksheetContext, WorksheetLocator};

#[async_trait]
pub trait LessonReader: Send + Sync {
    /// All projects ordered by name.
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError>;

    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError>;

    /// Find a worksheet by its project, section and worksheet slugs.
    async fn find_worksheet(
        &self,
        locator: &WorksheetLocator,
    ) -> Result<Option<WorksheetContext>, DomainError>;

    async fn find_worksheet_by_id(
        &self,
        id: WorksheetId,
    ) -> Result<Option<WorksheetContext>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn LessonReader) {}
    }
}
