//! HTTP Handlers
//!
//! Reads are anonymous. Mutating handlers sit behind the gate pipeline and
//! take the caller's [`RequestIdentity`] for the audit log.

use crate::application::{
    CreateTaskInput, CreateTaskUseCase, DeleteTaskUseCase, QueryTasksUseCase, UpdateTaskUseCase,
};
use crate::domain::entities::{Task, TaskChanges};
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use crate::presentation::dto::{
    CreateTaskRequest, CreateTaskResponse, MessageResponse, UpdateTaskRequest,
};
use auth::RequestIdentity;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

/// Shared state for task handlers
#[derive(Clone)]
pub struct TaskAppState<R>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /tasks
pub async fn list_tasks<R>(State(state): State<TaskAppState<R>>) -> TaskResult<Json<Vec<Task>>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let tasks = QueryTasksUseCase::new(state.repo.clone()).list().await?;
    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_task<R>(
    State(state): State<TaskAppState<R>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let task = QueryTasksUseCase::new(state.repo.clone()).get(&id).await?;
    Ok(Json(task))
}

/// POST /tasks
pub async fn create_task<R>(
    State(state): State<TaskAppState<R>>,
    identity: RequestIdentity,
    JsonBody(req): JsonBody<CreateTaskRequest>,
) -> TaskResult<(StatusCode, Json<CreateTaskResponse>)>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let input = CreateTaskInput {
        id: req.id,
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        status: req.status,
    };

    let task_id = CreateTaskUseCase::new(state.repo.clone())
        .execute(input, &identity.username)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTaskResponse {
            message: "task created successfully",
            task_id,
        }),
    ))
}

/// PUT /tasks/{id}
pub async fn update_task<R>(
    State(state): State<TaskAppState<R>>,
    identity: RequestIdentity,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTaskRequest>,
) -> TaskResult<Json<MessageResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    let changes = TaskChanges {
        title: req.title,
        description: req.description,
        status: req.status,
    };

    UpdateTaskUseCase::new(state.repo.clone())
        .execute(&id, changes, &identity.username)
        .await?;

    Ok(Json(MessageResponse {
        message: "task updated",
    }))
}

/// DELETE /tasks/{id}
pub async fn delete_task<R>(
    State(state): State<TaskAppState<R>>,
    identity: RequestIdentity,
    Path(id): Path<String>,
) -> TaskResult<Json<MessageResponse>>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    DeleteTaskUseCase::new(state.repo.clone())
        .execute(&id, &identity.username)
        .await?;

    Ok(Json(MessageResponse {
        message: "task deleted",
    }))
}
