//! DeleteEntryHandler - Command handler for removing changelog entries.

use std::sync::Arc;

use tracing::info;

use crate::domain::changes::EntryError;
use crate::domain::foundation::EntryId;
use crate::ports::EntryRepository;

#[derive(Debug, Clone)]
pub struct DeleteEntryCommand {
    pub id: EntryId,
}

pub struct DeleteEntryHandler {
    repository: Arc<dyn EntryRepository>,
}

impl DeleteEntryHandler {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteEntryCommand) -> Result<(), EntryError> {
        self.repository.delete(cmd.id).await.map_err(|e| {
            if e.code.is_not_found() {
                EntryError::not_found(cmd.id)
            } else {
                EntryError::from(e)
            }
        })?;

        info!(entry_id = %cmd.id, "Entry deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntryStore;
    use crate::domain::changes::EntryInput;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let store = InMemoryEntryStore::new();
        let entry = store
            .create(
                &UserId::new("tim").unwrap(),
                &EntryInput {
                    title: "Gone soon".to_string(),
                    description: "x".to_string(),
                    video: None,
                },
            )
            .await
            .unwrap();
        let handler = DeleteEntryHandler::new(Arc::new(store.clone()));

        handler.handle(DeleteEntryCommand { id: entry.id }).await.unwrap();
        let again = handler.handle(DeleteEntryCommand { id: entry.id }).await;

        assert!(matches!(again, Err(EntryError::NotFound(_))));
        assert_eq!(store.count().await, 0);
    }
}
