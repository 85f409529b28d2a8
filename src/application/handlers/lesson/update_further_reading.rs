//! UpdateFurtherReadingHandler - Command handler for editing further reading.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::FurtherReadingId;
use crate::domain::lesson::{
    FurtherReading, FurtherReadingForm, LessonError, WorksheetContext, WorksheetLocator,
};
use crate::ports::{FurtherReadingRepository, LessonReader};

/// Command to update a further reading item.
#[derive(Debug, Clone)]
pub struct UpdateFurtherReadingCommand {
    pub id: FurtherReadingId,
    pub locator: WorksheetLocator,
    pub form: FurtherReadingForm,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateFurtherReadingResult {
    pub item: FurtherReading,
    pub worksheet: WorksheetContext,
}

/// Handler for updating further reading.
///
/// The item is re-bound to the worksheet named by the route.
pub struct UpdateFurtherReadingHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
}

impl UpdateFurtherReadingHandler {
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
        cmd: UpdateFurtherReadingCommand,
    ) -> Result<UpdateFurtherReadingResult, LessonError> {
        // 1. Resolve the worksheet
        let worksheet = self
            .lessons
            .find_worksheet(&cmd.locator)
            .await?
            .ok_or_else(|| LessonError::WorksheetNotFound(cmd.locator.clone()))?;

        // 2. Load existing item
        let mut item = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or(LessonError::FurtherReadingNotFound(cmd.id))?;

        // 3. Validate and apply
        let input = cmd.form.validate().map_err(LessonError::ValidationFailed)?;
        item.apply(worksheet.id(), input);

        // 4. Persist
        self.repository.update(&item).await.map_err(|e| {
            if e.code.is_not_found() {
                LessonError::FurtherReadingNotFound(cmd.id)
            } else {
                LessonError::from(e)
            }
        })?;

        info!(further_reading_id = %item.id, "Further reading updated");

        Ok(UpdateFurtherReadingResult { item, worksheet })
    }
}
