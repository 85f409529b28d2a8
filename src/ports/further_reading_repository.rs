//! Further reading repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FurtherReadingId, ProjectId, WorksheetId};
use crate::domain::lesson::{FurtherReading, FurtherReadingInput};

/// A further reading item with the title of its worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFurtherReading {
    pub item: FurtherReading,
    pub worksheet: String,
}

/// Repository port for further reading persistence.
///
/// Every write commits on its own.
#[async_trait]
pub trait FurtherReadingRepository: Send + Sync {
    /// Insert a new item bound to `worksheet_id` and return it with its pk.
    ///
    /// # Errors
    ///
    /// - `WorksheetNotFound` if the worksheet vanished since lookup
    /// - `DatabaseError` on persistence failure
    async fn create(
        &self,
        worksheet_id: WorksheetId,
        input: &FurtherReadingInput,
    ) -> Result<FurtherReading, DomainError>;

    /// Persist changed fields of an existing item.
    ///
    /// # Errors
    ///
    /// - `FurtherReadingNotFound` if no row has this pk
    async fn update(&self, item: &FurtherReading) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: FurtherReadingId)
        -> Result<Option<FurtherReading>, DomainError>;

    /// Remove an item.
    ///
    /// # Errors
    ///
    /// - `FurtherReadingNotFound` if no row has this pk
    async fn delete(&self, id: FurtherReadingId) -> Result<(), DomainError>;

    /// Items of one worksheet ordered by pk.
    async fn list_by_worksheet(
        &self,
        worksheet_id: WorksheetId,
    ) -> Result<Vec<FurtherReading>, DomainError>;

    /// Every item under a project, through its sections and worksheets.
    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ProjectFurtherReading>, DomainError>;
}
