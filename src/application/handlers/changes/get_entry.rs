//! Entry queries: single entry and paginated list.

use std::sync::Arc;

use crate::domain::changes::{Entry, EntryError};
use crate::domain::foundation::EntryId;
use crate::ports::{EntryPage, EntryRepository, PageRequest};

/// Default entries per list page.
pub const DEFAULT_ENTRIES_PER_PAGE: u32 = 10;

#[derive(Debug, Clone)]
pub struct GetEntryQuery {
    pub id: EntryId,
}

pub struct GetEntryHandler {
    repository: Arc<dyn EntryRepository>,
}

impl GetEntryHandler {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetEntryQuery) -> Result<Entry, EntryError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(EntryError::NotFound(query.id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListEntriesQuery {
    /// 1-based page number; defaults to the first page.
    pub page: Option<u32>,
}

pub struct ListEntriesHandler {
    repository: Arc<dyn EntryRepository>,
    per_page: u32,
}

impl ListEntriesHandler {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self {
            repository,
            per_page: DEFAULT_ENTRIES_PER_PAGE,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn handle(&self, query: ListEntriesQuery) -> Result<EntryPage, EntryError> {
        let request = PageRequest::new(query.page, self.per_page);
        Ok(self.repository.list(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntryStore;
    use crate::domain::changes::EntryInput;
    use crate::domain::foundation::UserId;

    async fn store_with(count: usize) -> InMemoryEntryStore {
        let store = InMemoryEntryStore::new();
        let author = UserId::new("tim").unwrap();
        for i in 0..count {
            store
                .create(
                    &author,
                    &EntryInput {
                        title: format!("Entry {}", i),
                        description: "x".to_string(),
                        video: None,
                    },
                )
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn get_missing_entry_is_not_found() {
        let handler = GetEntryHandler::new(Arc::new(InMemoryEntryStore::new()));
        let result = handler.handle(GetEntryQuery { id: EntryId::new(1) }).await;
        assert!(matches!(result, Err(EntryError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_uses_configured_page_size() {
        let store = store_with(5).await;
        let handler = ListEntriesHandler::new(Arc::new(store)).with_per_page(2);

        let page = handler
            .handle(ListEntriesQuery { page: Some(2) })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page, 2);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn page_zero_is_first_page() {
        let store = store_with(3).await;
        let handler = ListEntriesHandler::new(Arc::new(store));
        let page = handler
            .handle(ListEntriesQuery { page: Some(0) })
            .await
            .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 3);
    }
}
