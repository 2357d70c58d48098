//! Domain Entities
//!
//! Core business entities for the task domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of work tracked by the service
///
/// `id` is chosen by the client and is not checked for uniqueness. When
/// several tasks share an id, lookups and mutations act on the oldest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 on the wire
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form, e.g. "pending" or "done"
    #[serde(default)]
    pub status: String,
}

impl Task {
    /// Apply an update; `id` and `due_date` never change
    pub fn apply(&mut self, changes: TaskChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.status = changes.status;
    }
}

/// Replacement values written by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
    pub status: String,
}
