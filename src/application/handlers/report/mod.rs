//! Invalid further reading report handlers.

mod get_invalid_links;
mod render_invalid_links;

pub use get_invalid_links::{
    GetInvalidLinksHandler, GetInvalidLinksQuery, DEFAULT_CHECK_CONCURRENCY,
};
pub use render_invalid_links::{
    report_html, RenderInvalidLinksCommand, RenderInvalidLinksHandler, RenderedReport,
};
