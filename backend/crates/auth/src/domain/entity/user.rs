//! User Entity
//!
//! A registered account. Never mutated after registration.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Login handle
    pub username: UserName,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    /// Permission tier
    pub role: UserRole,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: UserName, password_hash: UserPassword, role: UserRole) -> Self {
        Self {
            username,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }
}
