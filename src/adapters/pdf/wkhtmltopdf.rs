//! wkhtmltopdf-based PDF renderer.
//!
//! Pipes the HTML document to `wkhtmltopdf` over stdin and reads the PDF
//! from stdout. The binary must be installed; otherwise rendering returns
//! `RenderError::Unavailable`.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::{PdfRenderer, RenderError};

#[derive(Debug, Clone)]
pub struct WkhtmlToPdfRenderer {
    /// Path to the executable. If None, will search PATH.
    binary_path: Option<String>,
    timeout_secs: u64,
}

impl Default for WkhtmlToPdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl WkhtmlToPdfRenderer {
    pub fn new() -> Self {
        Self {
            binary_path: None,
            timeout_secs: 30,
        }
    }

    pub fn with_binary_path(mut self, path: impl Into<String>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn command(&self) -> &str {
        self.binary_path.as_deref().unwrap_or("wkhtmltopdf")
    }
}

#[async_trait]
impl PdfRenderer for WkhtmlToPdfRenderer {
    async fn html_to_pdf(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new(self.command())
            .args(["--quiet", "--encoding", "utf-8", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => RenderError::unavailable(format!(
                    "'{}' is not installed",
                    self.command()
                )),
                _ => RenderError::failed(format!("Failed to start wkhtmltopdf: {}", e)),
            })?;

        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(html.as_bytes()).await.map_err(|e| {
                    RenderError::failed(format!("Failed to write to wkhtmltopdf: {}", e))
                })?;
                // Dropping stdin closes the pipe so wkhtmltopdf sees EOF
            }
            Ok::<(), RenderError>(())
        };

        // stdout is drained while stdin is fed; the child is killed on timeout.
        let render = async move {
            let (fed, output) = tokio::join!(feed, child.wait_with_output());
            fed?;
            output.map_err(|e| RenderError::failed(format!("wkhtmltopdf execution failed: {}", e)))
        };

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), render)
            .await
            .map_err(|_| RenderError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::failed(format!(
                "wkhtmltopdf returned error: {}",
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    async fn is_available(&self) -> bool {
        Command::new(self.command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_path() {
        let renderer = WkhtmlToPdfRenderer::new();
        assert_eq!(renderer.command(), "wkhtmltopdf");
        assert_eq!(renderer.timeout_secs, 30);
    }

    #[test]
    fn custom_binary_and_timeout() {
        let renderer = WkhtmlToPdfRenderer::new()
            .with_binary_path("/opt/wk/bin/wkhtmltopdf")
            .with_timeout(5);
        assert_eq!(renderer.command(), "/opt/wk/bin/wkhtmltopdf");
        assert_eq!(renderer.timeout_secs, 5);
    }

    #[tokio::test]
    async fn missing_binary_is_unavailable() {
        let renderer = WkhtmlToPdfRenderer::new().with_binary_path("/nonexistent/wkhtmltopdf");
        assert!(!renderer.is_available().await);
        let result = renderer.html_to_pdf("<html></html>").await;
        assert!(matches!(result, Err(RenderError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stalled_renderer_times_out_while_writing_input() {
        use std::os::unix::fs::PermissionsExt;

        let script = std::env::temp_dir().join(format!("stalled-renderer-{}", std::process::id()));
        std::fs::write(&script, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = WkhtmlToPdfRenderer::new()
            .with_binary_path(script.to_string_lossy().into_owned())
            .with_timeout(1);
        // Larger than a pipe buffer, so the write blocks on a child that never reads.
        let html = format!("<html><body>{}</body></html>", "x".repeat(1 << 20));

        let started = std::time::Instant::now();
        let result = renderer.html_to_pdf(&html).await;
        let _ = std::fs::remove_file(&script);

        assert!(matches!(result, Err(RenderError::Timeout(1))));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    #[ignore = "requires wkhtmltopdf to be installed"]
    async fn renders_real_pdf() {
        let renderer = WkhtmlToPdfRenderer::new();
        let pdf = renderer
            .html_to_pdf("<html><body><h1>Hello</h1></body></html>")
            .await
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
