//! PDF rendering configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Path to `wkhtmltopdf`; searched on PATH when unset
    #[serde(default)]
    pub wkhtmltopdf_path: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl PdfConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            wkhtmltopdf_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
