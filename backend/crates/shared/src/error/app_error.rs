//! Application Error
//!
//! [`AppError`] is what every failure becomes at the HTTP boundary.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

type Source = Box<dyn Error + Send + Sync + 'static>;

/// Client-facing failure.
///
/// `kind`, `message` and `action` are rendered; `source` only ever reaches
/// the log.
///
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::Unauthorized, "missing token")
///     .with_action("Send an Authorization: Bearer <token> header");
/// assert_eq!(err.status_code(), 401);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Source>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// What the client can do about it
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pick_kind() {
        assert_eq!(AppError::bad_request("x").status_code(), 400);
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::internal("x").status_code(), 500);

        let err = AppError::new(ErrorKind::Forbidden, "forbidden");
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.message(), "forbidden");
        assert!(err.action().is_none());
    }

    #[test]
    fn test_action() {
        let err = AppError::bad_request("invalid request").with_action("Send JSON");
        assert_eq!(err.action(), Some("Send JSON"));
        assert_eq!(err.to_string(), "Bad Request: invalid request");
    }

    #[test]
    fn test_source_is_kept_but_not_displayed() {
        let err = AppError::internal("store unavailable")
            .with_source(std::io::Error::other("connection reset by peer"));
        assert!(err.source().is_some());
        assert!(!err.to_string().contains("connection reset"));
    }
}
