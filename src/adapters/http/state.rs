//! Shared application state for the page handlers.

use std::sync::Arc;

use crate::application::handlers::{
    CreateEntryHandler, CreateFurtherReadingHandler, DeleteEntryHandler,
    DeleteFurtherReadingHandler, GetEntryHandler, GetFurtherReadingHandler, GetInvalidLinksHandler,
    GetWorksheetHandler, ListEntriesHandler, ListProjectsHandler, LocateWorksheetHandler,
    RenderInvalidLinksHandler, UpdateEntryHandler, UpdateFurtherReadingHandler,
};
use crate::application::handlers::changes::DEFAULT_ENTRIES_PER_PAGE;
use crate::application::handlers::report::DEFAULT_CHECK_CONCURRENCY;
use crate::ports::{
    EntryRepository, FurtherReadingRepository, LessonReader, LinkChecker, PdfRenderer,
};

/// Tunables the handlers read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSettings {
    pub entries_per_page: u32,
    pub link_check_concurrency: usize,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
            link_check_concurrency: DEFAULT_CHECK_CONCURRENCY,
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every dependency is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub lesson_reader: Arc<dyn LessonReader>,
    pub further_reading_repository: Arc<dyn FurtherReadingRepository>,
    pub entry_repository: Arc<dyn EntryRepository>,
    pub link_checker: Arc<dyn LinkChecker>,
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub settings: SiteSettings,
}

impl AppState {
    pub fn new(
        lesson_reader: Arc<dyn LessonReader>,
        further_reading_repository: Arc<dyn FurtherReadingRepository>,
        entry_repository: Arc<dyn EntryRepository>,
        link_checker: Arc<dyn LinkChecker>,
        pdf_renderer: Arc<dyn PdfRenderer>,
    ) -> Self {
        Self {
            lesson_reader,
            further_reading_repository,
            entry_repository,
            link_checker,
            pdf_renderer,
            settings: SiteSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = settings;
        self
    }

    // Lessons

    pub fn list_projects_handler(&self) -> ListProjectsHandler {
        ListProjectsHandler::new(self.lesson_reader.clone())
    }

    pub fn get_worksheet_handler(&self) -> GetWorksheetHandler {
        GetWorksheetHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
        )
    }

    pub fn locate_worksheet_handler(&self) -> LocateWorksheetHandler {
        LocateWorksheetHandler::new(self.lesson_reader.clone())
    }

    pub fn get_further_reading_handler(&self) -> GetFurtherReadingHandler {
        GetFurtherReadingHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
        )
    }

    pub fn create_further_reading_handler(&self) -> CreateFurtherReadingHandler {
        CreateFurtherReadingHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
        )
    }

    pub fn update_further_reading_handler(&self) -> UpdateFurtherReadingHandler {
        UpdateFurtherReadingHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
        )
    }

    pub fn delete_further_reading_handler(&self) -> DeleteFurtherReadingHandler {
        DeleteFurtherReadingHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
        )
    }

    // Reports

    pub fn get_invalid_links_handler(&self) -> GetInvalidLinksHandler {
        GetInvalidLinksHandler::new(
            self.lesson_reader.clone(),
            self.further_reading_repository.clone(),
            self.link_checker.clone(),
        )
        .with_concurrency(self.settings.link_check_concurrency)
    }

    pub fn render_invalid_links_handler(&self) -> RenderInvalidLinksHandler {
        RenderInvalidLinksHandler::new(self.pdf_renderer.clone())
    }

    // Changelog

    pub fn list_entries_handler(&self) -> ListEntriesHandler {
        ListEntriesHandler::new(self.entry_repository.clone())
            .with_per_page(self.settings.entries_per_page)
    }

    pub fn get_entry_handler(&self) -> GetEntryHandler {
        GetEntryHandler::new(self.entry_repository.clone())
    }

    pub fn create_entry_handler(&self) -> CreateEntryHandler {
        CreateEntryHandler::new(self.entry_repository.clone())
    }

    pub fn update_entry_handler(&self) -> UpdateEntryHandler {
        UpdateEntryHandler::new(self.entry_repository.clone())
    }

    pub fn delete_entry_handler(&self) -> DeleteEntryHandler {
        DeleteEntryHandler::new(self.entry_repository.clone())
    }
}
