//! Query Tasks Use Case
//!
//! Anonymous reads.

use crate::domain::entities::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use std::sync::Arc;

/// Query Tasks Use Case
pub struct QueryTasksUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> QueryTasksUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> TaskResult<Vec<Task>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: &str) -> TaskResult<Task> {
        self.repo.find_by_id(id).await?.ok_or(TaskError::NotFound)
    }
}
