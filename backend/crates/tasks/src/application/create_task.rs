//! Create Task Use Case

use crate::domain::entities::Task;
use crate::domain::repository::TaskRepository;
use crate::error::{TaskError, TaskResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Input DTO for create task
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// Create Task Use Case
pub struct CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTaskUseCase<R>
where
    R: TaskRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store the task and return its id
    ///
    /// An existing task with the same id is left alone; both are kept.
    pub async fn execute(&self, input: CreateTaskInput, actor: &str) -> TaskResult<String> {
        // An empty id could never be addressed by /tasks/{id}
        if input.id.trim().is_empty() {
            return Err(TaskError::Validation("id cannot be empty".to_string()));
        }

        let task = Task {
            id: input.id,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
        };

        self.repo.create(&task).await?;

        tracing::info!(task_id = %task.id, actor = %actor, "Task created");

        Ok(task.id)
    }
}
