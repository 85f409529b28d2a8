//! In-memory changelog entry store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::changes::{Entry, EntryInput};
use crate::domain::foundation::{DomainError, EntryId, ErrorCode, Timestamp, UserId};
use crate::ports::{EntryPage, EntryRepository, PageRequest};

#[derive(Debug, Default)]
struct Entries {
    next_id: i64,
    rows: BTreeMap<EntryId, Entry>,
}

/// Changelog entries held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryStore {
    entries: Arc<RwLock<Entries>>,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.rows.len()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryStore {
    async fn create(&self, author: &UserId, input: &EntryInput) -> Result<Entry, DomainError> {
        let mut entries = self.entries.write().await;
        entries.next_id += 1;
        let now = Timestamp::now();
        let entry = Entry {
            id: EntryId::new(entries.next_id),
            title: input.title.clone(),
            description: input.description.clone(),
            video: input.video.clone(),
            author: author.clone(),
            created_at: now,
            updated_at: now,
        };
        entries.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: &Entry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        match entries.rows.get_mut(&entry.id) {
            Some(existing) => {
                *existing = entry.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::EntryNotFound,
                format!("Entry not found: {}", entry.id),
            )),
        }
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, DomainError> {
        Ok(self.entries.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: EntryId) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.rows.remove(&id).map(|_| ()).ok_or_else(|| {
            DomainError::new(ErrorCode::EntryNotFound, format!("Entry not found: {}", id))
        })
    }

    async fn list(&self, page: PageRequest) -> Result<EntryPage, DomainError> {
        let entries = self.entries.read().await;
        // Newest first; pk breaks ties between entries created in the same instant
        let mut rows: Vec<&Entry> = entries.rows.values().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .cloned()
            .collect();
        Ok(EntryPage {
            items,
            total: entries.rows.len() as u64,
            page: page.page,
            per_page: page.per_page,
        })
    }
}
