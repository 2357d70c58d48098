//! User Name Value Object
//!
//! The login handle. Unique across the user store and immutable once a user
//! has been registered.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to [`USER_NAME_MAX_LENGTH`] characters
//! - No whitespace or control characters inside

use derive_more::Display;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    Empty,
    TooLong { max: usize, actual: usize },
    InvalidCharacter(char),
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserNameError::Empty => write!(f, "Username cannot be empty"),
            UserNameError::TooLong { max, actual } => {
                write!(f, "Username must be at most {max} characters (got {actual})")
            }
            UserNameError::InvalidCharacter(_) => {
                write!(f, "Username cannot contain whitespace or control characters")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if let Some(ch) = trimmed
            .chars()
            .find(|ch| ch.is_whitespace() || ch.is_control())
        {
            return Err(UserNameError::InvalidCharacter(ch));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
