//! DeleteFurtherReadingHandler - Command handler for removing further reading.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::FurtherReadingId;
use crate::domain::lesson::{LessonError, WorksheetContext};
use crate::ports::{FurtherReadingRepository, LessonReader};

/// Command to delete a further reading item.
#[derive(Debug, Clone)]
pub struct DeleteFurtherReadingCommand {
    pub id: FurtherReadingId,
}

/// Result of a successful delete.
#[derive(Debug, Clone)]
pub struct DeleteFurtherReadingResult {
    /// Worksheet the deleted item belonged to; the redirect target.
    pub worksheet: WorksheetContext,
}

/// Handler for deleting further reading.
pub struct DeleteFurtherReadingHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
}

impl DeleteFurtherReadingHandler {
    pub fn new(
        lessons: Arc<dyn LessonReader>,
        repository: Arc<dyn FurtherReadingRepository>,
    ) -> Self {
        Self {
            lessons,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteFurtherReadingCommand,
    ) -> Result<DeleteFurtherReadingResult, LessonError> {
        let item = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or(LessonError::FurtherReadingNotFound(cmd.id))?;

        let worksheet = self
            .lessons
            .find_worksheet_by_id(item.worksheet_id)
            .await?
            .ok_or(LessonError::WorksheetIdNotFound(item.worksheet_id))?;

        // A concurrent delete between load and remove is still a 404
        self.repository.delete(cmd.id).await.map_err(|e| {
            if e.code.is_not_found() {
                LessonError::FurtherReadingNotFound(cmd.id)
            } else {
                LessonError::from(e)
            }
        })?;

        info!(further_reading_id = %cmd.id, "Further reading deleted");

        Ok(DeleteFurtherReadingResult { worksheet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::adapters::memory::InMemoryLessonStore;
    use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, WorksheetId};
    use crate::domain::lesson::{FurtherReading, FurtherReadingInput};
    use crate::ports::ProjectFurtherReading;

    async fn seeded() -> (InMemoryLessonStore, FurtherReading) {
        let store = InMemoryLessonStore::new();
        let project = store.add_project("QGIS", "qgis").await.unwrap();
        let section = store.add_section(project.id, "Vector", "vector").await.unwrap();
        let worksheet = store
            .add_worksheet(section.id, "Digitising", "digitising")
            .await
            .unwrap();
        let item = store
            .create(
                worksheet.id,
                &FurtherReadingInput {
                    text: "Guide".to_string(),
                    link: "https://docs.qgis.org".to_string(),
                },
            )
            .await
            .unwrap();
        (store, item)
    }

    #[tokio::test]
    async fn delete_returns_parent_worksheet() {
        let (store, item) = seeded().await;
        let handler =
            DeleteFurtherReadingHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));

        let result = handler
            .handle(DeleteFurtherReadingCommand { id: item.id })
            .await
            .unwrap();

        assert_eq!(result.worksheet.id(), item.worksheet_id);
        assert_eq!(store.further_reading_count().await, 0);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let (store, item) = seeded().await;
        let handler =
            DeleteFurtherReadingHandler::new(Arc::new(store.clone()), Arc::new(store.clone()));

        handler
            .handle(DeleteFurtherReadingCommand { id: item.id })
            .await
            .unwrap();
        let again = handler
            .handle(DeleteFurtherReadingCommand { id: item.id })
            .await;

        assert!(matches!(again, Err(LessonError::FurtherReadingNotFound(id)) if id == item.id));
    }

    /// Finds the item but loses the race on delete.
    struct RacingRepository {
        item: FurtherReading,
        delete_calls: Mutex<u32>,
    }

    #[async_trait]
    impl FurtherReadingRepository for RacingRepository {
        async fn create(
            &self,
            _worksheet_id: WorksheetId,
            _input: &FurtherReadingInput,
        ) -> Result<FurtherReading, DomainError> {
            unimplemented!()
        }

        async fn update(&self, _item: &FurtherReading) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: FurtherReadingId,
        ) -> Result<Option<FurtherReading>, DomainError> {
            Ok(Some(self.item.clone()))
        }

        async fn delete(&self, id: FurtherReadingId) -> Result<(), DomainError> {
            *self.delete_calls.lock().unwrap() += 1;
            Err(DomainError::new(
                ErrorCode::FurtherReadingNotFound,
                format!("Further reading not found: {}", id),
            ))
        }

        async fn list_by_worksheet(
            &self,
            _worksheet_id: WorksheetId,
        ) -> Result<Vec<FurtherReading>, DomainError> {
            Ok(vec![])
        }

        async fn list_by_project(
            &self,
            _project_id: ProjectId,
        ) -> Result<Vec<ProjectFurtherReading>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn concurrent_delete_maps_to_not_found() {
        let (store, item) = seeded().await;
        let repository = Arc::new(RacingRepository {
            item: item.clone(),
            delete_calls: Mutex::new(0),
        });
        let handler = DeleteFurtherReadingHandler::new(Arc::new(store), repository.clone());

        let result = handler
            .handle(DeleteFurtherReadingCommand { id: item.id })
            .await;

        assert!(matches!(result, Err(LessonError::FurtherReadingNotFound(_))));
        assert_eq!(*repository.delete_calls.lock().unwrap(), 1);
    }
}
