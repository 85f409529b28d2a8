//! In-memory lesson store.
//!
//! Implements `LessonReader` and `FurtherReadingRepository` over plain maps.
//! Used by tests and for running the service without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, FurtherReadingId, ProjectId, SectionId, Slug, ValidationError,
    WorksheetId,
};
use crate::domain::lesson::{
    FurtherReading, FurtherReadingInput, Project, Section, Worksheet, WorksheetContext,
    WorksheetLocator,
};
use crate::ports::{FurtherReadingRepository, LessonReader, ProjectFurtherReading};

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    projects: BTreeMap<ProjectId, Project>,
    sections: BTreeMap<SectionId, Section>,
    worksheets: BTreeMap<WorksheetId, Worksheet>,
    further_readings: BTreeMap<FurtherReadingId, FurtherReading>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn context(&self, worksheet: &Worksheet) -> Option<WorksheetContext> {
        let section = self.sections.get(&worksheet.section_id)?;
        let project = self.projects.get(&section.project_id)?;
        Some(WorksheetContext {
            worksheet: worksheet.clone(),
            section_slug: section.slug.clone(),
            project_slug: project.slug.clone(),
            project_name: project.name.clone(),
        })
    }
}

/// Lesson tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLessonStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryLessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_project(&self, name: &str, slug: &str) -> Result<Project, ValidationError> {
        let slug = Slug::new(slug)?;
        let mut tables = self.tables.write().await;
        if tables.projects.values().any(|p| p.slug == slug) {
            return Err(ValidationError::already_taken("slug", slug));
        }
        let project = Project {
            id: ProjectId::new(tables.next_id()),
            name: name.to_string(),
            slug,
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    pub async fn add_section(
        &self,
        project_id: ProjectId,
        name: &str,
        slug: &str,
    ) -> Result<Section, ValidationError> {
        let slug = Slug::new(slug)?;
        let mut tables = self.tables.write().await;
        if tables
            .sections
            .values()
            .any(|s| s.project_id == project_id && s.slug == slug)
        {
            return Err(ValidationError::already_taken("slug", slug));
        }
        let section = Section {
            id: SectionId::new(tables.next_id()),
            project_id,
            name: name.to_string(),
            slug,
        };
        tables.sections.insert(section.id, section.clone());
        Ok(section)
    }

    pub async fn add_worksheet(
        &self,
        section_id: SectionId,
        module: &str,
        slug: &str,
    ) -> Result<Worksheet, ValidationError> {
        let slug = Slug::new(slug)?;
        let mut tables = self.tables.write().await;
        if tables
            .worksheets
            .values()
            .any(|w| w.section_id == section_id && w.slug == slug)
        {
            return Err(ValidationError::already_taken("slug", slug));
        }
        let worksheet = Worksheet {
            id: WorksheetId::new(tables.next_id()),
            section_id,
            module: module.to_string(),
            slug,
        };
        tables.worksheets.insert(worksheet.id, worksheet.clone());
        Ok(worksheet)
    }

    /// Deletes a worksheet and, like the foreign key, its further reading.
    pub async fn remove_worksheet(&self, id: WorksheetId) -> bool {
        let mut tables = self.tables.write().await;
        let removed = tables.worksheets.remove(&id).is_some();
        tables.further_readings.retain(|_, item| item.worksheet_id != id);
        removed
    }

    pub async fn further_reading_count(&self) -> usize {
        self.tables.read().await.further_readings.len()
    }
}

#[async_trait]
impl LessonReader for InMemoryLessonStore {
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables.projects.values().cloned().collect();
        projects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(projects)
    }

    async fn find_project_by_slug(&self, slug: &str) -> Result<Option<Project>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .values()
            .find(|p| p.slug.as_str() == slug)
            .cloned())
    }

    async fn find_worksheet(
        &self,
        locator: &WorksheetLocator,
    ) -> Result<Option<WorksheetContext>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .worksheets
            .values()
            .filter(|w| w.slug.as_str() == locator.worksheet_slug)
            .filter_map(|w| tables.context(w))
            .find(|ctx| {
                ctx.section_slug.as_str() == locator.section_slug
                    && ctx.project_slug.as_str() == locator.project_slug
            }))
    }

    async fn find_worksheet_by_id(
        &self,
        id: WorksheetId,
    ) -> Result<Option<WorksheetContext>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.worksheets.get(&id).and_then(|w| tables.context(w)))
    }
}

#[async_trait]
impl FurtherReadingRepository for InMemoryLessonStore {
    async fn create(
        &self,
        worksheet_id: WorksheetId,
        input: &FurtherReadingInput,
    ) -> Result<FurtherReading, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.worksheets.contains_key(&worksheet_id) {
            return Err(DomainError::new(
                ErrorCode::WorksheetNotFound,
                format!("Worksheet not found: {}", worksheet_id),
            ));
        }
        let item = FurtherReading {
            id: FurtherReadingId::new(tables.next_id()),
            worksheet_id,
            text: input.text.clone(),
            link: input.link.clone(),
        };
        tables.further_readings.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: &FurtherReading) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.further_readings.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::FurtherReadingNotFound,
                format!("Further reading not found: {}", item.id),
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: FurtherReadingId,
    ) -> Result<Option<FurtherReading>, DomainError> {
        Ok(self.tables.read().await.further_readings.get(&id).cloned())
    }

    async fn delete(&self, id: FurtherReadingId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.further_readings.remove(&id).map(|_| ()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::FurtherReadingNotFound,
                format!("Further reading not found: {}", id),
            )
        })
    }

    async fn list_by_worksheet(
        &self,
        worksheet_id: WorksheetId,
    ) -> Result<Vec<FurtherReading>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .further_readings
            .values()
            .filter(|item| item.worksheet_id == worksheet_id)
            .cloned()
            .collect())
    }

    async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<ProjectFurtherReading>, DomainError> {
        let tables = self.tables.read().await;
        let items = tables
            .further_readings
            .values()
            .filter_map(|item| {
                let worksheet = tables.worksheets.get(&item.worksheet_id)?;
                let section = tables.sections.get(&worksheet.section_id)?;
                (section.project_id == project_id).then(|| ProjectFurtherReading {
                    item: item.clone(),
                    worksheet: worksheet.module.clone(),
                })
            })
            .collect();
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str, link: &str) -> FurtherReadingInput {
        FurtherReadingInput {
            text: text.to_string(),
            link: link.to_string(),
        }
    }

    async fn seeded() -> (InMemoryLessonStore, Project, Worksheet) {
        let store = InMemoryLessonStore::new();
        let project = store.add_project("QGIS", "qgis").await.unwrap();
        let section = store.add_section(project.id, "Vector", "vector").await.unwrap();
        let worksheet = store
            .add_worksheet(section.id, "Digitising", "digitising")
            .await
            .unwrap();
        (store, project, worksheet)
    }

    #[tokio::test]
    async fn project_slug_is_unique() {
        let (store, _, _) = seeded().await;
        let err = store.add_project("QGIS again", "qgis").await.unwrap_err();
        assert_eq!(err, ValidationError::already_taken("slug", "qgis"));
        assert_eq!(store.list_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn section_slug_is_unique_within_project() {
        let (store, project, _) = seeded().await;
        assert!(matches!(
            store.add_section(project.id, "Vector again", "vector").await,
            Err(ValidationError::AlreadyTaken { .. })
        ));

        let other = store.add_project("InaSAFE", "inasafe").await.unwrap();
        assert!(store.add_section(other.id, "Vector", "vector").await.is_ok());
    }

    #[tokio::test]
    async fn worksheet_slug_is_unique_within_section() {
        let (store, project, worksheet) = seeded().await;
        assert!(matches!(
            store
                .add_worksheet(worksheet.section_id, "Digitising 2", "digitising")
                .await,
            Err(ValidationError::AlreadyTaken { .. })
        ));

        let raster = store.add_section(project.id, "Raster", "raster").await.unwrap();
        assert!(store
            .add_worksheet(raster.id, "Digitising", "digitising")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn finds_worksheet_by_all_three_slugs() {
        let (store, _, worksheet) = seeded().await;
        let found = store
            .find_worksheet(&WorksheetLocator::new("qgis", "vector", "digitising"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), worksheet.id);
        assert_eq!(found.project_name, "QGIS");

        let wrong_section = store
            .find_worksheet(&WorksheetLocator::new("qgis", "raster", "digitising"))
            .await
            .unwrap();
        assert!(wrong_section.is_none());
    }

    #[tokio::test]
    async fn create_requires_existing_worksheet() {
        let (store, _, _) = seeded().await;
        let result = store
            .create(WorksheetId::new(999), &input("x", "https://x.org"))
            .await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::WorksheetNotFound));
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let (store, _, worksheet) = seeded().await;
        let item = store
            .create(worksheet.id, &input("Guide", "https://docs.qgis.org"))
            .await
            .unwrap();
        store.delete(item.id).await.unwrap();
        let again = store.delete(item.id).await;
        assert!(matches!(again, Err(e) if e.code == ErrorCode::FurtherReadingNotFound));
    }

    #[tokio::test]
    async fn removing_worksheet_cascades_to_further_reading() {
        let (store, _, worksheet) = seeded().await;
        store
            .create(worksheet.id, &input("Guide", "https://docs.qgis.org"))
            .await
            .unwrap();
        assert_eq!(store.further_reading_count().await, 1);
        assert!(store.remove_worksheet(worksheet.id).await);
        assert_eq!(store.further_reading_count().await, 0);
    }

    #[tokio::test]
    async fn list_by_project_only_returns_that_projects_items() {
        let (store, project, worksheet) = seeded().await;
        let other = store.add_project("InaSAFE", "inasafe").await.unwrap();
        let other_section = store.add_section(other.id, "Intro", "intro").await.unwrap();
        let other_ws = store
            .add_worksheet(other_section.id, "Basics", "basics")
            .await
            .unwrap();
        store
            .create(worksheet.id, &input("Mine", "https://a.org"))
            .await
            .unwrap();
        store
            .create(other_ws.id, &input("Theirs", "https://b.org"))
            .await
            .unwrap();

        let items = store.list_by_project(project.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].worksheet, "Digitising");
        assert_eq!(items[0].item.text, "Mine");
    }
}
