//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input failed validation (username, password or role)
    #[error("{0}")]
    Validation(String),

    /// User name already exists
    #[error("username already exists")]
    DuplicateUsername,

    /// Unknown user or wrong password
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No Authorization header
    #[error("missing authorization header")]
    MissingCredential,

    /// Token could not be accepted
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Authenticated, but the role does not permit the operation
    #[error("insufficient role")]
    Forbidden,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::DuplicateUsername => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::MissingCredential
            | AuthError::Token(_) => ErrorKind::Unauthorized,
            AuthError::Forbidden => ErrorKind::Forbidden,
            AuthError::Hashing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the log; the client gets a fixed message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Hashing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), "internal server error")
            }
            AuthError::MissingCredential | AuthError::Token(_) => {
                AppError::new(self.kind(), self.to_string())
                    .with_action("Send an Authorization: Bearer <token> header from /login")
            }
            AuthError::Forbidden => AppError::new(self.kind(), self.to_string())
                .with_action("This operation requires the admin role"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Hashing(msg) => {
                tracing::error!(message = %msg, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Token(TokenError::InvalidSignature) => {
                tracing::warn!("Token signature mismatch detected");
            }
            AuthError::Forbidden => {
                tracing::warn!("Write attempt without required role");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::DuplicateUsername.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::MissingCredential.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::Token(TokenError::Expired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AuthError::Hashing("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let err = AuthError::Internal("connection refused on 10.0.0.5".into());
        assert_eq!(err.to_app_error().message(), "internal server error");

        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_app_error().message(), "internal server error");
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_app_error().message(),
            "invalid username or password"
        );
    }
}
