//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Hashing and verification are
//! CPU-bound, so the async variants run them on tokio's blocking pool and
//! the request awaits the result.
//!
//! ## Usage
//! ```rust,ignore
//! let raw = RawPassword::new("pw123".to_string())?;
//! let hashed = UserPassword::hash(raw, None).await?;
//!
//! let again = RawPassword::new("pw123".to_string())?;
//! assert!(hashed.verify(again, None).await);
//! ```

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate user input
    ///
    /// Policy violations become [`AuthError::Validation`].
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AuthError::Validation("Password cannot be empty".to_string())
            }
            other => AuthError::Validation(other.to_string()),
        })?;

        Ok(Self(clear_text))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC string as stored alongside the user
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash on the current thread
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw
            .0
            .hash(pepper)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Hash on the blocking pool
    pub async fn hash(raw: RawPassword, pepper: Option<Vec<u8>>) -> AuthResult<Self> {
        tokio::task::spawn_blocking(move || Self::from_raw(&raw, pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// Wrap the stored string
    ///
    /// The value is not parsed here; a corrupt hash simply never verifies.
    pub fn from_stored(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(phc_string))
    }

    /// Hash checked when the account does not exist, so a miss costs as
    /// much as a wrong password
    pub fn dummy() -> Self {
        Self(HashedPassword::dummy())
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify on the current thread
    pub fn verify_blocking(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    /// Verify on the blocking pool
    ///
    /// A panicked or cancelled verification counts as a mismatch.
    pub async fn verify(&self, raw: RawPassword, pepper: Option<Vec<u8>>) -> bool {
        let hashed = self.clone();
        match tokio::task::spawn_blocking(move || {
            hashed.verify_blocking(&raw, pepper.as_deref())
        })
        .await
        {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("pw123".to_string()).is_ok());
        assert!(matches!(
            RawPassword::new("".to_string()),
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            RawPassword::new("a".repeat(129)),
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hashed = UserPassword::hash(raw("pw123"), None).await.unwrap();

        assert_ne!(hashed.as_phc_string(), "pw123");
        assert!(hashed.verify(raw("pw123"), None).await);
        assert!(!hashed.verify(raw("pw1234"), None).await);
    }

    #[tokio::test]
    async fn test_hash_with_pepper() {
        let pepper = b"app_secret_pepper".to_vec();
        let hashed = UserPassword::hash(raw("pw123"), Some(pepper.clone()))
            .await
            .unwrap();

        assert!(hashed.verify(raw("pw123"), Some(pepper)).await);
        assert!(!hashed.verify(raw("pw123"), None).await);
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_is_a_mismatch() {
        let stored = UserPassword::from_stored("$2a$14$not-an-argon2-hash");
        assert!(!stored.verify(raw("pw123"), None).await);
    }

    #[tokio::test]
    async fn test_dummy_never_verifies() {
        let dummy = UserPassword::dummy();
        assert!(dummy.as_phc_string().starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
        assert!(!dummy.verify(raw("pw123"), None).await);
        assert!(!dummy.verify(raw("pw123"), Some(b"pepper".to_vec())).await);
    }

    #[test]
    fn test_debug_redaction() {
        let debug = format!("{:?}", raw("SecretPassword123!"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::from_raw(&raw("pw123"), None).unwrap();
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
