//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresLessonReader` - Project and worksheet lookups
//! - `PostgresFurtherReadingRepository` - Further reading persistence
//! - `PostgresEntryRepository` - Changelog entry persistence

mod entry_repository;
mod further_reading_repository;
mod lesson_reader;
mod row;

pub use entry_repository::PostgresEntryRepository;
pub use further_reading_repository::PostgresFurtherReadingRepository;
pub use lesson_reader::PostgresLessonReader;
