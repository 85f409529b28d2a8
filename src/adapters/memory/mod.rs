//! In-memory storage adapters.

mod entry_store;
mod lesson_store;

pub use entry_store::InMemoryEntryStore;
pub use lesson_store::InMemoryLessonStore;
