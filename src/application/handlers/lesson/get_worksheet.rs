//! Worksheet queries.
//!
//! - `GetWorksheetHandler` - detail page, addressed by pk
//! - `LocateWorksheetHandler` - form pages, addressed by slugs

use std::sync::Arc;

use crate::domain::foundation::WorksheetId;
use crate::domain::lesson::{FurtherReading, LessonError, WorksheetContext, WorksheetLocator};
use crate::ports::{FurtherReadingRepository, LessonReader};

/// Query for the worksheet detail page.
///
/// The project and section slugs come from the URL and must match the
/// worksheet's actual parents.
#[derive(Debug, Clone)]
pub struct GetWorksheetQuery {
    pub project_slug: String,
    pub section_slug: String,
    pub id: WorksheetId,
}

/// A worksheet and its further reading.
#[derive(Debug, Clone)]
pub struct WorksheetDetail {
    pub worksheet: WorksheetContext,
    pub further_reading: Vec<FurtherReading>,
}

pub struct GetWorksheetHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
}

impl GetWorksheetHandler {
    pub fn new(
        lessons: Arc<dyn LessonReader>,
        repository: Arc<dyn FurtherReadingRepository>,
    ) -> Self {
        Self {
            lessons,
            repository,
        }
    }

    pub async fn handle(&self, query: GetWorksheetQuery) -> Result<WorksheetDetail, LessonError> {
        let worksheet = self
            .lessons
            .find_worksheet_by_id(query.id)
            .await?
            .filter(|ctx| {
                ctx.project_slug.as_str() == query.project_slug
                    && ctx.section_slug.as_str() == query.section_slug
            })
            .ok_or(LessonError::WorksheetIdNotFound(query.id))?;

        let further_reading = self.repository.list_by_worksheet(worksheet.id()).await?;

        Ok(WorksheetDetail {
            worksheet,
            further_reading,
        })
    }
}

/// Resolves a worksheet from its route slugs.
pub struct LocateWorksheetHandler {
    lessons: Arc<dyn LessonReader>,
}

impl LocateWorksheetHandler {
    pub fn new(lessons: Arc<dyn LessonReader>) -> Self {
        Self { lessons }
    }

    pub async fn handle(&self, locator: WorksheetLocator) -> Result<WorksheetContext, LessonError> {
        self.lessons
            .find_worksheet(&locator)
            .await?
            .ok_or(LessonError::WorksheetNotFound(locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLessonStore;
    use crate::domain::lesson::{FurtherReadingInput, Worksheet};

    async fn seeded() -> (InMemoryLessonStore, Worksheet) {
        let store = InMemoryLessonStore::new();
        let project = store.add_project("QGIS", "qgis").await.unwrap();
        let section = store.add_section(project.id, "Vector", "vector").await.unwrap();
        let worksheet = store
            .add_worksheet(section.id, "Digitising", "digitising")
            .await
            .unwrap();
        store
            .create(
                worksheet.id,
                &FurtherReadingInput {
                    text: "Guide".to_string(),
                    link: "https://docs.qgis.org".to_string(),
                },
            )
            .await
            .unwrap();
        (store, worksheet)
    }

    #[tokio::test]
    async fn detail_lists_further_reading() {
        let (store, worksheet) = seeded().await;
        let handler = GetWorksheetHandler::new(Arc::new(store.clone()), Arc::new(store));

        let detail = handler
            .handle(GetWorksheetQuery {
                project_slug: "qgis".to_string(),
                section_slug: "vector".to_string(),
                id: worksheet.id,
            })
            .await
            .unwrap();

        assert_eq!(detail.worksheet.id(), worksheet.id);
        assert_eq!(detail.further_reading.len(), 1);
    }

    #[tokio::test]
    async fn mismatched_slugs_are_not_found() {
        let (store, worksheet) = seeded().await;
        let handler = GetWorksheetHandler::new(Arc::new(store.clone()), Arc::new(store));

        let result = handler
            .handle(GetWorksheetQuery {
                project_slug: "inasafe".to_string(),
                section_slug: "vector".to_string(),
                id: worksheet.id,
            })
            .await;

        assert!(matches!(result, Err(LessonError::WorksheetIdNotFound(_))));
    }

    #[tokio::test]
    async fn locate_by_slugs() {
        let (store, worksheet) = seeded().await;
        let handler = LocateWorksheetHandler::new(Arc::new(store));

        let found = handler
            .handle(WorksheetLocator::new("qgis", "vector", "digitising"))
            .await
            .unwrap();
        assert_eq!(found.id(), worksheet.id);

        let missing = handler
            .handle(WorksheetLocator::new("qgis", "vector", "nope"))
            .await;
        assert!(matches!(missing, Err(LessonError::WorksheetNotFound(_))));
    }
}
