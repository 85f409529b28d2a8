//! Changelog entry repository port.

use async_trait::async_trait;

use crate::domain::changes::{Entry, EntryInput};
use crate::domain::foundation::{DomainError, EntryId, UserId};

/// Pagination request, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Clamps `page` to at least 1 and `per_page` to 1..=100.
    pub fn new(page: Option<u32>, per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.clamp(1, 100),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

/// One page of entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPage {
    pub items: Vec<Entry>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl EntryPage {
    pub fn has_next(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create(&self, author: &UserId, input: &EntryInput) -> Result<Entry, DomainError>;

    /// # Errors
    ///
    /// - `EntryNotFound` if no row has this pk
    async fn update(&self, entry: &Entry) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, DomainError>;

    /// # Errors
    ///
    /// - `EntryNotFound` if no row has this pk
    async fn delete(&self, id: EntryId) -> Result<(), DomainError>;

    async fn list(&self, page: PageRequest) -> Result<EntryPage, DomainError>;
}
