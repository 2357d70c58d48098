//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod create_task;
pub mod delete_task;
pub mod query_tasks;
pub mod update_task;

pub use create_task::{CreateTaskInput, CreateTaskUseCase};
pub use delete_task::DeleteTaskUseCase;
pub use query_tasks::QueryTasksUseCase;
pub use update_task::UpdateTaskUseCase;
