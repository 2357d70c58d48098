//! API DTOs (Data Transfer Objects)

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// `member` or `admin`; `member` when omitted
    #[serde(default)]
    pub role: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let register: RegisterRequest = serde_json::from_str(
            r#"{"username":"alice","password":"hunter2-secret","role":"admin"}"#,
        )
        .unwrap();
        let debug = format!("{:?}", register);
        assert!(debug.contains("alice"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2-secret"));

        let login: LoginRequest =
            serde_json::from_str(r#"{"username":"alice","password":"hunter2-secret"}"#).unwrap();
        let debug = format!("{:?}", login);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2-secret"));
    }
}
