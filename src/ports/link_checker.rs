//! Link checker port.
//!
//! Classifies a URL as valid or invalid. The policy (syntax rules,
//! reachability, acceptable status codes) belongs to the adapter.

use async_trait::async_trait;

/// Outcome of checking one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Valid,
    Invalid(String),
}

impl LinkStatus {
    pub fn invalid(reason: impl Into<String>) -> Self {
        LinkStatus::Invalid(reason.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, LinkStatus::Valid)
    }
}

/// Checks links for validity.
///
/// Never fails: network and parse problems are themselves reasons a link is
/// invalid.
#[async_trait]
pub trait LinkChecker: Send + Sync {
    async fn check(&self, url: &str) -> LinkStatus;
}
