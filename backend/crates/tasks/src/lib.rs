//! Tasks Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Task entity, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-process repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - `GET /tasks` and `GET /tasks/{id}` are anonymous
//! - `POST`, `PUT` and `DELETE` pass through an `auth::GatePipeline`
//! - Ids are client-chosen and not unique; keyed operations hit the first match

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entities::{Task, TaskChanges};
pub use error::{TaskError, TaskResult};
pub use infra::{memory::InMemoryTaskRepository, postgres::PgTaskRepository};
pub use presentation::router::task_router;

#[cfg(test)]
mod tests;
