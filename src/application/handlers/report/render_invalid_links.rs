//! RenderInvalidLinksHandler - Turns an invalid-link report into a PDF.

use std::sync::Arc;

use tracing::info;

use crate::application::html::escape;
use crate::domain::lesson::{report_filename, InvalidLinkReport};
use crate::ports::{PdfRenderer, RenderError};

/// Command to render a report.
#[derive(Debug, Clone)]
pub struct RenderInvalidLinksCommand {
    pub project_slug: String,
    pub report: InvalidLinkReport,
}

/// A rendered PDF with its download filename.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Handler for rendering reports. Every call renders from scratch.
pub struct RenderInvalidLinksHandler {
    renderer: Arc<dyn PdfRenderer>,
}

impl RenderInvalidLinksHandler {
    pub fn new(renderer: Arc<dyn PdfRenderer>) -> Self {
        Self { renderer }
    }

    pub async fn handle(&self, cmd: RenderInvalidLinksCommand) -> Result<RenderedReport, RenderError> {
        let html = report_html(&cmd.project_slug, &cmd.report);
        let bytes = self.renderer.html_to_pdf(&html).await?;

        info!(
            project_slug = %cmd.project_slug,
            links = cmd.report.links().len(),
            size = bytes.len(),
            "Rendered invalid further reading report"
        );

        Ok(RenderedReport {
            filename: report_filename(&cmd.project_slug),
            bytes,
        })
    }
}

/// Builds the printable HTML document for a report.
pub fn report_html(project_slug: &str, report: &InvalidLinkReport) -> String {
    let title = report.project_name.as_deref().unwrap_or(project_slug);

    let body = if report.links().is_empty() {
        "<p class=\"empty\">No invalid further reading links.</p>".to_string()
    } else {
        let rows: String = report
            .links()
            .iter()
            .map(|link| {
                format!(
                    "<tr><td>{id}</td><td>{worksheet}</td><td><a href=\"{url}\">{url}</a></td><td>{reason}</td></tr>\n",
                    id = link.id,
                    worksheet = escape(&link.worksheet),
                    url = escape(&link.url),
                    reason = escape(&link.reason),
                )
            })
            .collect();
        format!(
            "<table>\n<thead><tr><th>#</th><th>Worksheet</th><th>Link</th><th>Reason</th></tr></thead>\n<tbody>\n{}</tbody>\n</table>",
            rows
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Invalid Further Reading: {title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <h1>Invalid Further Reading: {title}</h1>
    <p class="count">{count} invalid link(s)</p>
{body}
</body>
</html>"#,
        title = escape(title),
        css = REPORT_CSS,
        count = report.links().len(),
        body = body
    )
}

const REPORT_CSS: &str = r#"
body { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 11pt; color: #1f2937; }
h1 { font-size: 18pt; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.3em; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #e5e7eb; padding: 4px 8px; text-align: left; vertical-align: top; }
th { background: #f3f4f6; }
td a { word-break: break-all; }
.empty, .count { color: #6b7280; }
"#;
