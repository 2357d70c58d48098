//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for POST /tasks
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

/// Request for PUT /tasks/{id}
///
/// `due_date` is not updatable and is ignored if sent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

/// Response for POST /tasks
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskResponse {
    pub message: &'static str,
    #[serde(rename = "taskID")]
    pub task_id: String,
}

/// Response for PUT and DELETE /tasks/{id}
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
