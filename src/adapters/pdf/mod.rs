//! PDF renderer adapters.

mod fixed;
mod wkhtmltopdf;

pub use fixed::{StubPdfRenderer, STUB_PDF};
pub use wkhtmltopdf::WkhtmlToPdfRenderer;
