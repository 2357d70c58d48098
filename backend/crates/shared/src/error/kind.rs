//! Error Kind
//!
//! The status a failure is reported with. Domain errors pick a kind; the kind
//! alone decides what the client sees.

use std::fmt;

/// Failure classification, one HTTP status per variant.
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
/// assert_eq!(ErrorKind::Forbidden.as_str(), "Forbidden");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Malformed body, invalid field, duplicate username
    BadRequest,
    /// Missing, malformed, forged or expired credential
    Unauthorized,
    /// Authenticated, but the role does not grant the operation
    Forbidden,
    /// No record with the requested key
    NotFound,
    /// Hashing failure, store failure, anything unexpected
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// Reason phrase, rendered as the problem `title`
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
    }

    #[test]
    fn test_display_is_reason_phrase() {
        assert_eq!(ErrorKind::NotFound.to_string(), "Not Found");
        assert_eq!(
            ErrorKind::InternalServerError.to_string(),
            "Internal Server Error"
        );
    }
}
