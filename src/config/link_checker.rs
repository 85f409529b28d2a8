//! Link checker configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct LinkCheckerConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Links checked at once per report
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl LinkCheckerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.concurrency == 0 || self.concurrency > 64 {
            return Err(ValidationError::InvalidConcurrency);
        }
        Ok(())
    }
}

impl Default for LinkCheckerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_concurrency() -> usize {
    8
}

fn default_user_agent() -> String {
    concat!("projecta-link-checker/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LinkCheckerConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = LinkCheckerConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidConcurrency));
    }
}
