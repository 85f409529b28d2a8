//! ListProjectsHandler - Query handler for the home page.

use std::sync::Arc;

use crate::domain::lesson::{LessonError, Project};
use crate::ports::LessonReader;

pub struct ListProjectsHandler {
    lessons: Arc<dyn LessonReader>,
}

impl ListProjectsHandler {
    pub fn new(lessons: Arc<dyn LessonReader>) -> Self {
        Self { lessons }
    }

    /// All projects, ordered by name.
    pub async fn handle(&self) -> Result<Vec<Project>, LessonError> {
        Ok(self.lessons.list_projects().await?)
    }
}
