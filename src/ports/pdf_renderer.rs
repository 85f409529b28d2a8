//! PDF renderer port - HTML to PDF conversion.

use async_trait::async_trait;
use thiserror::Error;

/// Converts a complete HTML document into PDF bytes.
///
/// # Contract
///
/// - Every call renders from scratch; nothing is cached between calls
/// - Returns `RenderError::Unavailable` when the engine is not installed
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError>;

    /// Check if the rendering engine can be used (health checks).
    async fn is_available(&self) -> bool;
}

/// Errors from PDF rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("PDF renderer unavailable: {0}")]
    Unavailable(String),

    #[error("PDF rendering failed: {0}")]
    Failed(String),

    #[error("PDF rendering timed out after {0} seconds")]
    Timeout(u64),
}

impl RenderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        RenderError::Unavailable(message.into())
    }

    pub fn failed(message: impl Into<String>) -> Self {
        RenderError::Failed(message.into())
    }
}
