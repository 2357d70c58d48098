use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission tier attached to a user and embedded in issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Member,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "member" => Some(UserRole::Member),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Unknown role code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
