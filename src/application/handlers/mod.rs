//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod changes;
pub mod lesson;
pub mod report;

pub use changes::{
    CreateEntryCommand, CreateEntryHandler, DeleteEntryCommand, DeleteEntryHandler,
    GetEntryHandler, GetEntryQuery, ListEntriesHandler, ListEntriesQuery, UpdateEntryCommand,
    UpdateEntryHandler,
};
pub use lesson::{
    CreateFurtherReadingCommand, CreateFurtherReadingHandler, CreateFurtherReadingResult,
    DeleteFurtherReadingCommand, DeleteFurtherReadingHandler, DeleteFurtherReadingResult,
    FurtherReadingView, GetFurtherReadingHandler, GetFurtherReadingQuery, GetWorksheetHandler,
    GetWorksheetQuery, ListProjectsHandler, LocateWorksheetHandler, UpdateFurtherReadingCommand,
    UpdateFurtherReadingHandler, UpdateFurtherReadingResult, WorksheetDetail,
};
pub use report::{
    GetInvalidLinksHandler, GetInvalidLinksQuery, RenderInvalidLinksCommand,
    RenderInvalidLinksHandler, RenderedReport,
};
