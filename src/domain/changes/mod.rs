//! Changes domain - the project changelog.

mod entry;
mod errors;

pub use entry::{Entry, EntryForm, EntryInput, MAX_TITLE_LENGTH};
pub use errors::EntryError;
