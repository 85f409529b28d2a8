//! Site configuration: locales and page sizes.

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Locale prefixes the routes are additionally mounted under
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,

    /// Changelog entries per list page
    #[serde(default = "default_entries_per_page")]
    pub entries_per_page: u32,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for locale in &self.locales {
            let valid = !locale.is_empty()
                && locale
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-' || c == '_');
            if !valid {
                return Err(ValidationError::InvalidLocale(locale.clone()));
            }
        }
        if self.entries_per_page == 0 || self.entries_per_page > 100 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            entries_per_page: default_entries_per_page(),
        }
    }
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string(), "id".to_string()]
}

fn default_entries_per_page() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.locales, vec!["en", "id"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_locale_with_slash_is_rejected() {
        let config = SiteConfig {
            locales: vec!["en/us".to_string()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLocale("en/us".to_string()))
        );
    }

    #[test]
    fn test_page_size_bounds() {
        let config = SiteConfig {
            entries_per_page: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPageSize));
    }
}
