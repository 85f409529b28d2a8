//! Changelog entries and their form.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::form::{http_url, required_text};
use crate::domain::foundation::{EntryId, FormErrors, Timestamp, UserId};

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_VIDEO_LENGTH: usize = 200;

/// A changelog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub video: Option<String>,
    pub author: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entry {
    /// Overwrites the editable fields and bumps `updated_at`.
    ///
    /// The author is the creator and never changes on edit.
    pub fn apply(&mut self, input: EntryInput) {
        self.title = input.title;
        self.description = input.description;
        self.video = input.video;
        self.updated_at = Timestamp::now();
    }
}

/// Raw submitted form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video: String,
}

impl EntryForm {
    pub fn validate(&self) -> Result<EntryInput, FormErrors> {
        let mut errors = FormErrors::new();
        let title = required_text(&mut errors, "title", &self.title, MAX_TITLE_LENGTH);
        let description = required_text(
            &mut errors,
            "description",
            &self.description,
            MAX_DESCRIPTION_LENGTH,
        );
        let video = if self.video.trim().is_empty() {
            None
        } else {
            Some(http_url(&mut errors, "video", &self.video, MAX_VIDEO_LENGTH))
        };
        errors.into_result(EntryInput {
            title,
            description,
            video,
        })
    }
}

impl From<&Entry> for EntryForm {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            video: entry.video.clone().unwrap_or_default(),
        }
    }
}

/// Validated entry fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub title: String,
    pub description: String,
    pub video: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, video: &str) -> EntryForm {
        EntryForm {
            title: title.to_string(),
            description: description.to_string(),
            video: video.to_string(),
        }
    }

    #[test]
    fn blank_video_is_optional() {
        let input = form("New symbology", "Rule based styling", "  ").validate().unwrap();
        assert_eq!(input.video, None);
    }

    #[test]
    fn video_must_be_http_url_when_given() {
        let errors = form("t", "d", "youtube").validate().unwrap_err();
        assert_eq!(errors.for_field("video").len(), 1);
    }

    #[test]
    fn title_and_description_are_required() {
        let errors = form("", "", "").validate().unwrap_err();
        assert_eq!(errors.for_field("title").len(), 1);
        assert_eq!(errors.for_field("description").len(), 1);
    }

    #[test]
    fn apply_keeps_author_and_bumps_updated_at() {
        let created = Timestamp::now();
        let mut entry = Entry {
            id: EntryId::new(1),
            title: "Old".to_string(),
            description: "Old".to_string(),
            video: None,
            author: UserId::new("tim").unwrap(),
            created_at: created,
            updated_at: created,
        };
        let input = form("New", "New body", "https://youtu.be/abc").validate().unwrap();
        entry.apply(input);
        assert_eq!(entry.title, "New");
        assert_eq!(entry.video.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(entry.author.as_str(), "tim");
        assert!(entry.updated_at >= created);
    }
}
