//! CreateEntryHandler - Command handler for new changelog entries.

use std::sync::Arc;

use tracing::info;

use crate::domain::changes::{Entry, EntryError, EntryForm};
use crate::domain::foundation::UserId;
use crate::ports::EntryRepository;

/// Command to create an entry. The author is the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateEntryCommand {
    pub author: UserId,
    pub form: EntryForm,
}

pub struct CreateEntryHandler {
    repository: Arc<dyn EntryRepository>,
}

impl CreateEntryHandler {
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateEntryCommand) -> Result<Entry, EntryError> {
        let input = cmd.form.validate().map_err(EntryError::ValidationFailed)?;
        let entry = self.repository.create(&cmd.author, &input).await?;

        info!(entry_id = %entry.id, author = %entry.author, "Entry created");

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::adapters::memory::InMemoryEntryStore;
    use crate::domain::changes::EntryInput;
    use crate::domain::foundation::{DomainError, EntryId, ErrorCode};
    use crate::ports::{EntryPage, PageRequest};

    fn form(title: &str, video: &str) -> EntryForm {
        EntryForm {
            title: title.to_string(),
            description: "What changed".to_string(),
            video: video.to_string(),
        }
    }

    #[tokio::test]
    async fn creator_becomes_author() {
        let store = InMemoryEntryStore::new();
        let handler = CreateEntryHandler::new(Arc::new(store.clone()));

        let entry = handler
            .handle(CreateEntryCommand {
                author: UserId::new("tim").unwrap(),
                form: form("Release 2.0", ""),
            })
            .await
            .unwrap();

        assert_eq!(entry.author.as_str(), "tim");
        assert_eq!(entry.video, None);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn invalid_video_writes_nothing() {
        let store = InMemoryEntryStore::new();
        let handler = CreateEntryHandler::new(Arc::new(store.clone()));

        let result = handler
            .handle(CreateEntryCommand {
                author: UserId::new("tim").unwrap(),
                form: form("Release 2.0", "youtube"),
            })
            .await;

        assert!(matches!(result, Err(EntryError::ValidationFailed(e)) if !e.for_field("video").is_empty()));
        assert_eq!(store.count().await, 0);
    }

    struct FailingRepository {
        calls: Mutex<u32>,
    }

    #[async_trait]
    impl EntryRepository for FailingRepository {
        async fn create(&self, _author: &UserId, _input: &EntryInput) -> Result<Entry, DomainError> {
            *self.calls.lock().unwrap() += 1;
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated failure"))
        }

        async fn update(&self, _entry: &Entry) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: EntryId) -> Result<Option<Entry>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _id: EntryId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn list(&self, page: PageRequest) -> Result<EntryPage, DomainError> {
            Ok(EntryPage {
                items: vec![],
                total: 0,
                page: page.page,
                per_page: page.per_page,
            })
        }
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure() {
        let repository = Arc::new(FailingRepository {
            calls: Mutex::new(0),
        });
        let handler = CreateEntryHandler::new(repository.clone());

        let result = handler
            .handle(CreateEntryCommand {
                author: UserId::new("tim").unwrap(),
                form: form("Release 2.0", ""),
            })
            .await;

        assert!(matches!(result, Err(EntryError::Infrastructure(_))));
        assert_eq!(*repository.calls.lock().unwrap(), 1);
    }
}
