//! Lesson domain - projects, sections, worksheets and their further reading.

mod errors;
mod further_reading;
mod project;
mod report;

pub use errors::LessonError;
pub use further_reading::{
    FurtherReading, FurtherReadingForm, FurtherReadingInput, MAX_LINK_LENGTH, MAX_TEXT_LENGTH,
};
pub use project::{Project, Section, Worksheet, WorksheetContext, WorksheetLocator};
pub use report::{report_filename, InvalidLink, InvalidLinkReport};
