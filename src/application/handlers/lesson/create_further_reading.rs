//! CreateFurtherReadingHandler - Command handler for adding further reading to a worksheet.

use std::sync::Arc;

use tracing::info;

use crate::domain::lesson::{
    FurtherReading, FurtherReadingForm, LessonError, WorksheetContext, WorksheetLocator,
};
use crate::ports::{FurtherReadingRepository, LessonReader};

/// Command to create a further reading item.
#[derive(Debug, Clone)]
pub struct CreateFurtherReadingCommand {
    pub locator: WorksheetLocator,
    pub form: FurtherReadingForm,
}

/// Result of a successful create.
#[derive(Debug, Clone)]
pub struct CreateFurtherReadingResult {
    pub item: FurtherReading,
    /// Worksheet the item was bound to; the redirect target.
    pub worksheet: WorksheetContext,
}

/// Handler for creating further reading.
pub struct CreateFurtherReadingHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
}

impl CreateFurtherReadingHandler {
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
        cmd: CreateFurtherReadingCommand,
    ) -> Result<CreateFurtherReadingResult, LessonError> {
        // 1. Resolve the worksheet before looking at the form
        let worksheet = self
            .lessons
            .find_worksheet(&cmd.locator)
            .await?
            .ok_or_else(|| LessonError::WorksheetNotFound(cmd.locator.clone()))?;

        // 2. Validate
        let input = cmd.form.validate().map_err(LessonError::ValidationFailed)?;

        // 3. Persist bound to the resolved worksheet
        let item = self.repository.create(worksheet.id(), &input).await?;

        info!(
            further_reading_id = %item.id,
            worksheet_id = %worksheet.id(),
            "Further reading created"
        );

        Ok(CreateFurtherReadingResult { item, worksheet })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLessonStore;

    fn form(text: &str, link: &str) -> FurtherReadingForm {
        FurtherReadingForm {
            text: text.to_string(),
            link: link.to_string(),
        }
    }

    async fn store_with_worksheet() -> InMemoryLessonStore {
        let store = InMemoryLessonStore::new();
        let project = store.add_project("QGIS", "qgis").await.unwrap();
        let section = store.add_section(project.id, "Vector", "vector").await.unwrap();
        store
            .add_worksheet(section.id, "Digitising", "digitising")
            .await
            .unwrap();
        store
    }

    fn handler(store: &InMemoryLessonStore) -> CreateFurtherReadingHandler {
        CreateFurtherReadingHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn creates_item_bound_to_located_worksheet() {
        let store = store_with_worksheet().await;
        let result = handler(&store)
            .handle(CreateFurtherReadingCommand {
                locator: WorksheetLocator::new("qgis", "vector", "digitising"),
                form: form("User guide", "https://docs.qgis.org"),
            })
            .await
            .unwrap();

        assert_eq!(result.item.worksheet_id, result.worksheet.id());
        assert_eq!(result.item.text, "User guide");
        assert_eq!(result.worksheet.project_slug.as_str(), "qgis");
        assert_eq!(store.further_reading_count().await, 1);
    }

    #[tokio::test]
    async fn unknown_worksheet_is_not_found_and_writes_nothing() {
        let store = store_with_worksheet().await;
        let result = handler(&store)
            .handle(CreateFurtherReadingCommand {
                locator: WorksheetLocator::new("qgis", "vector", "missing"),
                form: form("User guide", "https://docs.qgis.org"),
            })
            .await;

        assert!(matches!(result, Err(LessonError::WorksheetNotFound(_))));
        assert_eq!(store.further_reading_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_worksheet_wins_over_invalid_form() {
        let store = store_with_worksheet().await;
        let result = handler(&store)
            .handle(CreateFurtherReadingCommand {
                locator: WorksheetLocator::new("qgis", "raster", "digitising"),
                form: form("", ""),
            })
            .await;

        assert!(matches!(result, Err(LessonError::WorksheetNotFound(_))));
    }

    #[tokio::test]
    async fn invalid_form_writes_nothing() {
        let store = store_with_worksheet().await;
        let result = handler(&store)
            .handle(CreateFurtherReadingCommand {
                locator: WorksheetLocator::new("qgis", "vector", "digitising"),
                form: form("", "not a url"),
            })
            .await;

        match result {
            Err(LessonError::ValidationFailed(errors)) => {
                assert!(!errors.for_field("text").is_empty());
                assert!(!errors.for_field("link").is_empty());
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(store.further_reading_count().await, 0);
    }
}
