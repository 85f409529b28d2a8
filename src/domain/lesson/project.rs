//! Project, section and worksheet records.
//!
//! These are read-only from this service's point of view: they are authored
//! elsewhere and only looked up here to bind and locate further reading.

use serde::Serialize;

use crate::domain::foundation::{ProjectId, SectionId, Slug, WorksheetId};

/// A project owning lesson sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub slug: Slug,
}

/// A lesson section belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub project_id: ProjectId,
    pub name: String,
    pub slug: Slug,
}

/// A worksheet belonging to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worksheet {
    pub id: WorksheetId,
    pub section_id: SectionId,
    pub module: String,
    pub slug: Slug,
}

/// A worksheet together with the slugs of its section and project.
///
/// Everything needed to build the worksheet's detail URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetContext {
    pub worksheet: Worksheet,
    pub section_slug: Slug,
    pub project_slug: Slug,
    pub project_name: String,
}

impl WorksheetContext {
    pub fn id(&self) -> WorksheetId {
        self.worksheet.id
    }

    /// Route parameters for the `worksheet-detail` URL.
    pub fn detail_params(&self) -> [(&'static str, String); 3] {
        [
            ("project_slug", self.project_slug.to_string()),
            ("section_slug", self.section_slug.to_string()),
            ("worksheet", self.worksheet.id.to_string()),
        ]
    }
}

/// Route-level address of a worksheet.
///
/// Worksheet slugs are unique only within a section, so lookups use all
/// three slugs from the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetLocator {
    pub project_slug: String,
    pub section_slug: String,
    pub worksheet_slug: String,
}

impl WorksheetLocator {
    pub fn new(
        project_slug: impl Into<String>,
        section_slug: impl Into<String>,
        worksheet_slug: impl Into<String>,
    ) -> Self {
        Self {
            project_slug: project_slug.into(),
            section_slug: section_slug.into(),
            worksheet_slug: worksheet_slug.into(),
        }
    }
}

impl std::fmt::Display for WorksheetLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.project_slug, self.section_slug, self.worksheet_slug
        )
    }
}
