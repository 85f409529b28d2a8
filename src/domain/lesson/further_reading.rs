//! Further reading items and their form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::form::{http_url, required_text};
use crate::domain::foundation::{FormErrors, FurtherReadingId, WorksheetId};

/// Maximum stored length of a link, matching the column width.
pub const MAX_LINK_LENGTH: usize = 200;
/// Maximum length of the descriptive text.
pub const MAX_TEXT_LENGTH: usize = 2000;

/// A supplementary link attached to a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FurtherReading {
    pub id: FurtherReadingId,
    pub worksheet_id: WorksheetId,
    pub text: String,
    pub link: String,
}

impl FurtherReading {
    /// Overwrites the editable fields and rebinds to `worksheet_id`.
    pub fn apply(&mut self, worksheet_id: WorksheetId, input: FurtherReadingInput) {
        self.worksheet_id = worksheet_id;
        self.text = input.text;
        self.link = input.link;
    }
}

/// Raw submitted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FurtherReadingForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
}

impl FurtherReadingForm {
    /// Validates every field, reporting all failures together.
    pub fn validate(&self) -> Result<FurtherReadingInput, FormErrors> {
        let mut errors = FormErrors::new();
        let text = required_text(&mut errors, "text", &self.text, MAX_TEXT_LENGTH);
        let link = http_url(&mut errors, "link", &self.link, MAX_LINK_LENGTH);
        errors.into_result(FurtherReadingInput { text, link })
    }
}

impl From<&FurtherReading> for FurtherReadingForm {
    fn from(item: &FurtherReading) -> Self {
        Self {
            text: item.text.clone(),
            link: item.link.clone(),
        }
    }
}

/// Validated, normalized field values ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurtherReadingInput {
    pub text: String,
    pub link: String,
}
