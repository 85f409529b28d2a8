//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application handlers and the outside world. Adapters implement them.
//!
//! ## Storage Ports
//!
//! - `LessonReader` - Project / worksheet lookups
//! - `FurtherReadingRepository` - Further reading persistence
//! - `EntryRepository` - Changelog entry persistence
//!
//! ## Service Ports
//!
//! - `LinkChecker` - URL validity classification
//! - `PdfRenderer` - HTML to PDF conversion
//! - `SessionValidator` - Session token validation

mod entry_repository;
mod further_reading_repository;
mod lesson_reader;
mod link_checker;
mod pdf_renderer;
mod session_validator;

pub use entry_repository::{EntryPage, EntryRepository, PageRequest};
pub use further_reading_repository::{FurtherReadingRepository, ProjectFurtherReading};
pub use lesson_reader::LessonReader;
pub use link_checker::{LinkChecker, LinkStatus};
pub use pdf_renderer::{PdfRenderer, RenderError};
pub use session_validator::SessionValidator;
