//! Update Task Use Case

use crate::domain::entities::TaskChanges;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use std::sync::Arc;

/// Update Task Use Case
pub struct UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, changes: TaskChanges, actor: &str) -> TaskResult<()> {
        if !self.repo.update(id, &changes).await? {
            return Err(TaskError::NotFound);
        }

        tracing::info!(task_id = %id, actor = %actor, "Task updated");

        Ok(())
    }
}
