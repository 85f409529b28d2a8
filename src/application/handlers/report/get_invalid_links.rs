//! GetInvalidLinksHandler - Audits a project's further reading links.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::domain::lesson::{InvalidLink, InvalidLinkReport, LessonError};
use crate::ports::{FurtherReadingRepository, LessonReader, LinkChecker, LinkStatus};

/// Default number of links checked at once.
pub const DEFAULT_CHECK_CONCURRENCY: usize = 8;

/// Query for the invalid-link report.
#[derive(Debug, Clone, Default)]
pub struct GetInvalidLinksQuery {
    pub project_slug: Option<String>,
}

/// Handler producing the invalid-link report.
///
/// A missing or unknown project is not an error: the report is returned
/// with `data: null`.
pub struct GetInvalidLinksHandler {
    lessons: Arc<dyn LessonReader>,
    repository: Arc<dyn FurtherReadingRepository>,
    checker: Arc<dyn LinkChecker>,
    concurrency: usize,
}

impl GetInvalidLinksHandler {
    pub fn new(
        lessons: Arc<dyn LessonReader>,
        repository: Arc<dyn FurtherReadingRepository>,
        checker: Arc<dyn LinkChecker>,
    ) -> Self {
        Self {
            lessons,
            repository,
            checker,
            concurrency: DEFAULT_CHECK_CONCURRENCY,
        }
    }

    /// Set how many links are checked concurrently (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn handle(&self, query: GetInvalidLinksQuery) -> Result<InvalidLinkReport, LessonError> {
        let slug = match query.project_slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug,
            _ => return Ok(InvalidLinkReport::no_project()),
        };

        let Some(project) = self.lessons.find_project_by_slug(slug).await? else {
            debug!(project_slug = %slug, "Invalid link report requested for unknown project");
            return Ok(InvalidLinkReport::no_project());
        };

        let items = self.repository.list_by_project(project.id).await?;
        let checked = items.len();

        let invalid: Vec<InvalidLink> = stream::iter(items)
            .map(|entry| {
                let checker = Arc::clone(&self.checker);
                async move {
                    match checker.check(&entry.item.link).await {
                        LinkStatus::Valid => None,
                        LinkStatus::Invalid(reason) => Some(InvalidLink {
                            id: entry.item.id,
                            worksheet: entry.worksheet,
                            url: entry.item.link,
                            reason,
                        }),
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .filter_map(|result| async move { result })
            .collect()
            .await;

        if !invalid.is_empty() {
            warn!(
                project_slug = %project.slug,
                checked,
                invalid = invalid.len(),
                "Project has invalid further reading links"
            );
        }

        Ok(InvalidLinkReport::for_project(
            project.slug.as_str(),
            project.name,
            invalid,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::adapters::link_checker::StaticLinkChecker;
    use crate::adapters::memory::InMemoryLessonStore;
    use crate::domain::foundation::WorksheetId;
    use crate::domain::lesson::FurtherReadingInput;

    async fn add_item(store: &InMemoryLessonStore, worksheet: WorksheetId, link: &str) {
        store
            .create(
                worksheet,
                &FurtherReadingInput {
                    text: format!("About {}", link),
                    link: link.to_string(),
                },
            )
            .await
            .unwrap();
    }

    fn handler(store: &InMemoryLessonStore, checker: Arc<dyn LinkChecker>) -> GetInvalidLinksHandler {
        GetInvalidLinksHandler::new(Arc::new(store.clone()), Arc::new(store.clone()), checker)
    }

    #[tokio::test]
    async fn absent_slug_gives_data_null() {
        let store = InMemoryLessonStore::new();
        let report = handler(&store, Arc::new(StaticLinkChecker::all_valid()))
            .handle(GetInvalidLinksQuery::default())
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(report).unwrap(), json!({ "data": null }));
    }

    #[tokio::test]
    async fn blank_or_unknown_slug_gives_data_null() {
        let store = InMemoryLessonStore::new();
        let h = handler(&store, Arc::new(StaticLinkChecker::all_valid()));
        for slug in ["", "   ", "no-such-project"] {
            let report = h
                .handle(GetInvalidLinksQuery {
                    project_slug: Some(slug.to_string()),
                })
                .await
                .unwrap();
            assert_eq!(report, InvalidLinkReport::no_project());
        }
    }

    #[tokio::test]
    async fn project_without_items_gives_empty_list() {
        let store = InMemoryLessonStore::new();
        store.add_project("QGIS", "qgis").await.unwrap();
        let report = handler(&store, Arc::new(StaticLinkChecker::all_valid()))
            .handle(GetInvalidLinksQuery {
                project_slug: Some("qgis".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({ "data": [], "project_slug": "qgis", "project_name": "QGIS" })
        );
    }

    #[tokio::test]
    async fn only_invalid_links_are_reported() {
        let store = InMemoryLessonStore::new();
        let project = store.add_project("QGIS", "qgis").await.unwrap();
        let section = store.add_section(project.id, "Vector", "vector").await.unwrap();
        let worksheet = store
            .add_worksheet(section.id, "Digitising", "digitising")
            .await
            .unwrap();
        add_item(&store, worksheet.id, "https://docs.qgis.org").await;
        add_item(&store, worksheet.id, "https://gone.example.com").await;
        add_item(&store, worksheet.id, "https://moved.example.com").await;

        let checker = StaticLinkChecker::all_valid()
            .with_invalid("https://gone.example.com", "HTTP 404")
            .with_invalid("https://moved.example.com", "unreachable: connection refused");

        let report = handler(&store, Arc::new(checker))
            .with_concurrency(2)
            .handle(GetInvalidLinksQuery {
                project_slug: Some("qgis".to_string()),
            })
            .await
            .unwrap();

        let urls: HashSet<&str> = report.links().iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            HashSet::from(["https://gone.example.com", "https://moved.example.com"])
        );
        assert!(report.links().iter().all(|l| l.worksheet == "Digitising"));
    }

    /// Records every URL it is asked about.
    struct RecordingChecker {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LinkChecker for RecordingChecker {
        async fn check(&self, url: &str) -> LinkStatus {
            self.seen.lock().unwrap().push(url.to_string());
            LinkStatus::Valid
        }
    }

    #[tokio::test]
    async fn other_projects_links_are_not_checked() {
        let store = InMemoryLessonStore::new();
        let qgis = store.add_project("QGIS", "qgis").await.unwrap();
        let other = store.add_project("InaSAFE", "inasafe").await.unwrap();
        let s1 = store.add_section(qgis.id, "Vector", "vector").await.unwrap();
        let s2 = store.add_section(other.id, "Intro", "intro").await.unwrap();
        let w1 = store.add_worksheet(s1.id, "Digitising", "digitising").await.unwrap();
        let w2 = store.add_worksheet(s2.id, "Basics", "basics").await.unwrap();
        add_item(&store, w1.id, "https://qgis.org").await;
        add_item(&store, w2.id, "https://inasafe.org").await;

        let checker = Arc::new(RecordingChecker {
            seen: Mutex::new(Vec::new()),
        });
        handler(&store, checker.clone())
            .handle(GetInvalidLinksQuery {
                project_slug: Some("qgis".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(*checker.seen.lock().unwrap(), vec!["https://qgis.org".to_string()]);
    }
}
