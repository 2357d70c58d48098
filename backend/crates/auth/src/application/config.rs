//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared behind an `Arc`; nothing here changes while the process runs.

use std::fmt;
use std::time::Duration;

/// Minimum signing secret length in bytes
pub const MIN_TOKEN_SECRET_LEN: usize = 32;

/// Token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Invalid auth configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Token secret must be at least {min} bytes (got {actual})")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Token secret is not valid base64")]
    SecretNotBase64,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 signing secret for session tokens
    token_secret: Vec<u8>,
    /// Token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config from a raw signing secret
    pub fn new(token_secret: Vec<u8>) -> Result<Self, ConfigError> {
        if token_secret.len() < MIN_TOKEN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                min: MIN_TOKEN_SECRET_LEN,
                actual: token_secret.len(),
            });
        }

        Ok(Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        })
    }

    /// Create config from a base64 (standard alphabet) secret, as found in
    /// the environment
    pub fn from_base64_secret(encoded: &str) -> Result<Self, ConfigError> {
        let secret =
            platform::crypto::from_base64(encoded).map_err(|_| ConfigError::SecretNotBase64)?;
        Self::new(secret)
    }

    /// Create config with a random signing secret
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(MIN_TOKEN_SECRET_LEN),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        let pepper = pepper.into();
        self.password_pepper = (!pepper.is_empty()).then_some(pepper);
        self
    }

    pub fn token_secret(&self) -> &[u8] {
        &self.token_secret
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
