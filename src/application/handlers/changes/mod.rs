//! Changelog entry command and query handlers.

mod create_entry;
mod delete_entry;
mod get_entry;
mod update_entry;

pub use create_entry::{CreateEntryCommand, CreateEntryHandler};
pub use delete_entry::{DeleteEntryCommand, DeleteEntryHandler};
pub use get_entry::{
    GetEntryHandler, GetEntryQuery, ListEntriesHandler, ListEntriesQuery,
    DEFAULT_ENTRIES_PER_PAGE,
};
pub use update_entry::{UpdateEntryCommand, UpdateEntryHandler};
