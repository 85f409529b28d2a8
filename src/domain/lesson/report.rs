//! Invalid further-reading link report.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FurtherReadingId;

/// One further reading item whose link failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvalidLink {
    pub id: FurtherReadingId,
    /// Title (module) of the worksheet the item belongs to.
    pub worksheet: String,
    pub url: String,
    pub reason: String,
}

/// Result of auditing a project's further reading links.
///
/// Serializes to `{"data": null}` when there is no project to report on,
/// and to `{"data": [...], "project_slug": ..., "project_name": ...}`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidLinkReport {
    pub data: Option<Vec<InvalidLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

impl InvalidLinkReport {
    /// The soft-failure report for a missing or unknown project.
    pub fn no_project() -> Self {
        Self {
            data: None,
            project_slug: None,
            project_name: None,
        }
    }

    pub fn for_project(
        project_slug: impl Into<String>,
        project_name: impl Into<String>,
        links: Vec<InvalidLink>,
    ) -> Self {
        Self {
            data: Some(links),
            project_slug: Some(project_slug.into()),
            project_name: Some(project_name.into()),
        }
    }

    pub fn links(&self) -> &[InvalidLink] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Download filename of the rendered report.
pub fn report_filename(project_slug: &str) -> String {
    format!("Invalid_FurtherReading_{}.pdf", project_slug)
}
