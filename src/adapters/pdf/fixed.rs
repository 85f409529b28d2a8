//! Renderer returning canned bytes, for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ports::{PdfRenderer, RenderError};

/// Minimal bytes that identify as a PDF.
pub const STUB_PDF: &[u8] = b"%PDF-1.4\n%%EOF\n";

#[derive(Debug, Default)]
pub struct StubPdfRenderer {
    error: Option<RenderError>,
    calls: AtomicUsize,
}

impl StubPdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: RenderError) -> Self {
        Self {
            error: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PdfRenderer for StubPdfRenderer {
    async fn html_to_pdf(&self, _html: &str) -> Result<Vec<u8>, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(STUB_PDF.to_vec()),
        }
    }

    async fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls() {
        let renderer = StubPdfRenderer::new();
        renderer.html_to_pdf("<p>a</p>").await.unwrap();
        renderer.html_to_pdf("<p>b</p>").await.unwrap();
        assert_eq!(renderer.calls(), 2);
    }

    #[tokio::test]
    async fn failing_renderer_returns_error() {
        let renderer = StubPdfRenderer::failing(RenderError::Timeout(1));
        assert_eq!(renderer.html_to_pdf("x").await, Err(RenderError::Timeout(1)));
        assert!(!renderer.is_available().await);
    }
}
