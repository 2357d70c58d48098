//! Task Error Types
//!
//! This module provides task-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Task-specific result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Task-specific error variants
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task with the requested id
    #[error("task not found")]
    NotFound,

    /// Payload failed validation
    #[error("{0}")]
    Validation(String),

    /// Store driver failure
    #[error("Store error: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::StoreUnavailable(_) | TaskError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::NotFound => ErrorKind::NotFound,
            TaskError::Validation(_) => ErrorKind::BadRequest,
            TaskError::StoreUnavailable(_) | TaskError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TaskError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Task store error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Task error");
            }
        }
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::StoreUnavailable(e) => AppError::from(e),
            TaskError::Internal(_) => AppError::internal("internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
