//! Credential Claims
//!
//! Signed into the token at login and recovered by the authentication gate.
//! Never stored server-side.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_role::UserRole;

/// Claim set carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: UserRole,
    /// Issued at (UNIX seconds)
    pub iat: i64,
    /// Expires at (UNIX seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(username: impl Into<String>, role: UserRole, iat: i64, ttl_secs: i64) -> Self {
        Self {
            username: username.into(),
            role,
            iat,
            exp: iat.saturating_add(ttl_secs),
        }
    }

    /// A claim is live while `now < exp`
    #[inline]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
