//! UpdateEntryHandler - Command handler for editing changelog entries.

use std::sync::Arc;

use tracing::info;

use crate::domain::changes::{Entry, EntryError, EntryForm};
use crate::domain::foundation::EntryId;
use crate::ports::EntryRepository;

#[derive(Debug, Clone)]
pub struct UpdateEntryCommand {
    pub id: EntryId,
    pub form: EntryForm,
}

pub struct UpdateEntryHandler {
    repository: Arc<dyn EntryRepository>,
}

impl UpdateEntryHandler {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateEntryCommand) -> Result<Entry, EntryError> {
        let mut entry = self
            .repository
            .find_by_id(cmd.id)
            .await?
            .ok_or(EntryError::NotFound(cmd.id))?;

        let input = cmd.form.validate().map_err(EntryError::ValidationFailed)?;
        entry.apply(input);

        self.repository.update(&entry).await.map_err(|e| {
            if e.code.is_not_found() {
                EntryError::not_found(cmd.id)
            } else {
                EntryError::from(e)
            }
        })?;

        info!(entry_id = %entry.id, "Entry updated");

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntryStore;
    use crate::domain::changes::EntryInput;
    use crate::domain::foundation::UserId;

    async fn seeded() -> (InMemoryEntryStore, Entry) {
        let store = InMemoryEntryStore::new();
        let entry = store
            .create(
                &UserId::new("tim").unwrap(),
                &EntryInput {
                    title: "Draft".to_string(),
                    description: "First cut".to_string(),
                    video: None,
                },
            )
            .await
            .unwrap();
        (store, entry)
    }

    #[tokio::test]
    async fn update_then_fetch_returns_submitted_values() {
        let (store, entry) = seeded().await;
        let handler = UpdateEntryHandler::new(Arc::new(store.clone()));

        handler
            .handle(UpdateEntryCommand {
                id: entry.id,
                form: EntryForm {
                    title: "Final".to_string(),
                    description: "Polished".to_string(),
                    video: "https://youtu.be/abc".to_string(),
                },
            })
            .await
            .unwrap();

        let stored = store.find_by_id(entry.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Final");
        assert_eq!(stored.video.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(stored.author, entry.author);
        assert!(stored.updated_at >= entry.updated_at);
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let store = InMemoryEntryStore::new();
        let handler = UpdateEntryHandler::new(Arc::new(store));

        let result = handler
            .handle(UpdateEntryCommand {
                id: EntryId::new(42),
                form: EntryForm::default(),
            })
            .await;

        assert!(matches!(result, Err(EntryError::NotFound(id)) if id == EntryId::new(42)));
    }
}
