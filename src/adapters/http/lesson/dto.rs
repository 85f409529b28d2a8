//! Path and query types for lesson and report routes.

use serde::Deserialize;

use crate::domain::foundation::{FurtherReadingId, WorksheetId};
use crate::domain::lesson::WorksheetLocator;

use super::super::errors::HttpError;

/// Segments of `worksheet-detail`; `worksheet` is the worksheet pk.
#[derive(Debug, Clone, Deserialize)]
pub struct WorksheetDetailPath {
    pub project_slug: String,
    pub section_slug: String,
    pub worksheet: String,
}

impl WorksheetDetailPath {
    /// Non-digit pks do not match the route.
    pub fn worksheet_id(&self) -> Result<WorksheetId, HttpError> {
        self.worksheet.parse().map_err(|_| HttpError::NotFound)
    }
}

/// Segments shared by the further-reading routes; `worksheet` is the slug.
#[derive(Debug, Clone, Deserialize)]
pub struct WorksheetPath {
    pub project_slug: String,
    pub section_slug: String,
    pub worksheet: String,
}

impl WorksheetPath {
    pub fn locator(&self) -> WorksheetLocator {
        WorksheetLocator::new(&self.project_slug, &self.section_slug, &self.worksheet)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FurtherReadingPath {
    pub project_slug: String,
    pub section_slug: String,
    pub worksheet: String,
    pub pk: String,
}

impl FurtherReadingPath {
    pub fn locator(&self) -> WorksheetLocator {
        WorksheetLocator::new(&self.project_slug, &self.section_slug, &self.worksheet)
    }

    pub fn id(&self) -> Result<FurtherReadingId, HttpError> {
        self.pk.parse().map_err(|_| HttpError::NotFound)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPath {
    pub project_slug: String,
}

/// Query string of the print endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintQuery {
    /// Reporter JSON.
    pub data: Option<String>,
    pub download: Option<String>,
}

impl PrintQuery {
    /// Any value other than empty, `0` or `false` asks for a download.
    pub fn wants_download(&self) -> bool {
        match self.download.as_deref().map(str::trim) {
            None => false,
            Some(value) => !matches!(value, "" | "0") && !value.eq_ignore_ascii_case("false"),
        }
    }
}
