//! Delete Task Use Case

use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use std::sync::Arc;

/// Delete Task Use Case
pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, actor: &str) -> TaskResult<()> {
        if !self.repo.delete(id).await? {
            return Err(TaskError::NotFound);
        }

        tracing::info!(task_id = %id, actor = %actor, "Task deleted");

        Ok(())
    }
}
