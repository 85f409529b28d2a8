//! Link checker with preset answers, for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::ports::{LinkChecker, LinkStatus};

/// Answers from a fixed table; unknown URLs get the default status.
#[derive(Debug, Clone)]
pub struct StaticLinkChecker {
    overrides: HashMap<String, String>,
    default_valid: bool,
}

impl StaticLinkChecker {
    /// Every URL is valid unless overridden.
    pub fn all_valid() -> Self {
        Self {
            overrides: HashMap::new(),
            default_valid: true,
        }
    }

    /// Every URL is invalid with reason "unreachable: offline".
    pub fn all_invalid() -> Self {
        Self {
            overrides: HashMap::new(),
            default_valid: false,
        }
    }

    pub fn with_invalid(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.overrides.insert(url.into(), reason.into());
        self
    }
}

#[async_trait]
impl LinkChecker for StaticLinkChecker {
    async fn check(&self, url: &str) -> LinkStatus {
        if let Some(reason) = self.overrides.get(url) {
            return LinkStatus::invalid(reason.clone());
        }
        if self.default_valid {
            LinkStatus::Valid
        } else {
            LinkStatus::invalid("unreachable: offline")
        }
    }
}
