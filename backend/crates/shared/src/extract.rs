//! Request extractors
//!
//! Wrappers around axum extractors whose rejections are [`AppError`]s, so a
//! malformed body renders as the same problem JSON as every other failure.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// `axum::Json` with an `AppError` (400) rejection.
///
/// ```rust,ignore
/// async fn create(JsonBody(req): JsonBody<CreateTaskRequest>) -> impl IntoResponse { .. }
/// ```
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
