//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Task, TaskChanges)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
