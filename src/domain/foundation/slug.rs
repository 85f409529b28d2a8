//! URL-safe slug value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// URL-safe identifier used as an alternative key to the primary key.
///
/// Lowercase ASCII letters, digits, `-` and `_`; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("unexpected character '{}'", bad),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_lowercase_words_with_dashes() {
        assert_eq!(Slug::new("qgis-training_2").unwrap().as_str(), "qgis-training_2");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Slug::new(""), Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn rejects_uppercase_and_slashes() {
        assert!(Slug::new("QGIS").is_err());
        assert!(Slug::new("a/b").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Slug, _> = serde_json::from_str("\"inasafe\"");
        assert!(ok.is_ok());
        let bad: Result<Slug, _> = serde_json::from_str("\"In Asafe\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn slug_charset_is_accepted_verbatim(text in "[a-z0-9_-]{1,40}") {
            let slug = Slug::new(text.clone()).unwrap();
            prop_assert_eq!(slug.as_str(), text.as_str());
        }

        #[test]
        fn any_other_character_is_rejected(
            head in "[a-z0-9]{0,10}",
            bad in "[A-Z /?#%.]",
            tail in "[a-z0-9]{0,10}",
        ) {
            let candidate = format!("{}{}{}", head, bad, tail);
            prop_assert!(Slug::new(candidate).is_err());
        }
    }
}
