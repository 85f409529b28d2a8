//! GetFurtherReadingHandler - Query handler for a single further reading item.

use std::sync::Arc;

use crate::domain::foundation::FurtherReadingId;
use crate::domain::lesson::{FurtherReading, LessonError, WorksheetContext};
use crate::ports::{FurtherReadingRepository, LessonReader};

/// Query for one further reading item.
#[derive(Debug, Clone)]
pub struct GetFurtherReadingQuery {
    pub id: FurtherReadingId,
}

/// An item with the worksheet it currently belongs to.
#[derive(Debug, Clone)]
pub struct FurtherReadingView {
    pub item: FurtherReading,
    pub worksheet: WorksheetContext,
}

/// Loads an item for edit forms and delete confirmation.
pub struct GetFurtherReadingHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
}

impl GetFurtherReadingHandler {
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
        query: GetFurtherReadingQuery,
    ) -> Result<FurtherReadingView, LessonError> {
        let item = self
            .repository
            .find_by_id(query.id)
            .await?
            .ok_or(LessonError::FurtherReadingNotFound(query.id))?;

        let worksheet = self
            .lessons
            .find_worksheet_by_id(item.worksheet_id)
            .await?
            .ok_or(LessonError::WorksheetIdNotFound(item.worksheet_id))?;

        Ok(FurtherReadingView { item, worksheet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLessonStore;
    use crate::domain::lesson::FurtherReadingInput;

    #[tokio::test]
    async fn returns_item_with_its_worksheet() {
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

        let handler = GetFurtherReadingHandler::new(Arc::new(store.clone()), Arc::new(store));
        let view = handler
            .handle(GetFurtherReadingQuery { id: item.id })
            .await
            .unwrap();

        assert_eq!(view.item, item);
        assert_eq!(view.worksheet.worksheet.module, "Digitising");
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let store = InMemoryLessonStore::new();
        let handler = GetFurtherReadingHandler::new(Arc::new(store.clone()), Arc::new(store));
        let result = handler
            .handle(GetFurtherReadingQuery {
                id: FurtherReadingId::new(7),
            })
            .await;
        assert!(matches!(result, Err(e) if e.is_not_found()));
    }
}
