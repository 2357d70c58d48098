//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Task, TaskChanges};
use crate::error::TaskResult;

/// Task repository trait
///
/// Ids are not unique; every keyed operation targets the first task
/// inserted with that id.
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// All tasks in insertion order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// First task with `id`
    async fn find_by_id(&self, id: &str) -> TaskResult<Option<Task>>;

    /// Store a new task
    async fn create(&self, task: &Task) -> TaskResult<()>;

    /// Overwrite the mutable fields of the first task with `id`
    ///
    /// Returns `false` when there is no such task.
    async fn update(&self, id: &str, changes: &TaskChanges) -> TaskResult<bool>;

    /// Remove the first task with `id`
    ///
    /// Returns `false` when there is no such task.
    async fn delete(&self, id: &str) -> TaskResult<bool>;
}
