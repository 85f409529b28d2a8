//! Lesson command and query handlers.

mod create_further_reading;
mod delete_further_reading;
mod get_further_reading;
mod get_worksheet;
mod list_projects;
mod update_further_reading;

pub use create_further_reading::{
    CreateFurtherReadingCommand, CreateFurtherReadingHandler, CreateFurtherReadingResult,
};
pub use delete_further_reading::{
    DeleteFurtherReadingCommand, DeleteFurtherReadingHandler, DeleteFurtherReadingResult,
};
pub use get_further_reading::{
    FurtherReadingView, GetFurtherReadingHandler, GetFurtherReadingQuery,
};
pub use get_worksheet::{
    GetWorksheetHandler, GetWorksheetQuery, LocateWorksheetHandler, WorksheetDetail,
};
pub use list_projects::ListProjectsHandler;
pub use update_further_reading::{
    UpdateFurtherReadingCommand, UpdateFurtherReadingHandler, UpdateFurtherReadingResult,
};
