//! Error conversions - From implementations for common error types
//!
//! Driver and extractor failures become [`AppError`]s, and [`AppError`]
//! renders as an HTTP response when the `axum` feature is on.

use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Driver failures are never retried and never described to the client.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("record not found").with_source(err),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::bad_request("duplicate key value").with_source(err)
            }
            _ => AppError::internal("store unavailable").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        // Syntax errors, missing fields and a wrong Content-Type all count
        // as a malformed body.
        AppError::bad_request("invalid request")
            .with_action("Send a JSON body with the documented fields")
            .with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
