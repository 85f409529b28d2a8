//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through repository ports; query handlers only read.

pub mod handlers;
pub mod html;

pub use handlers::{
    // Lesson handlers
    CreateFurtherReadingCommand, CreateFurtherReadingHandler, DeleteFurtherReadingCommand,
    DeleteFurtherReadingHandler, GetFurtherReadingHandler, GetWorksheetHandler,
    ListProjectsHandler, LocateWorksheetHandler, UpdateFurtherReadingCommand,
    UpdateFurtherReadingHandler,
    // Changelog handlers
    CreateEntryCommand, CreateEntryHandler, DeleteEntryCommand, DeleteEntryHandler,
    GetEntryHandler, ListEntriesHandler, UpdateEntryCommand, UpdateEntryHandler,
    // Report handlers
    GetInvalidLinksHandler, GetInvalidLinksQuery, RenderInvalidLinksCommand,
    RenderInvalidLinksHandler,
};
