//! In-Process Repository Implementation
//!
//! Used when no database is configured, and by tests.

use crate::domain::entities::{Task, TaskChanges};
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Vector-backed task repository, insertion ordered
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, task: &Task) -> TaskResult<()> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn update(&self, id: &str, changes: &TaskChanges) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.apply(changes.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                tasks.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
