//! Password Hashing and Verification
//!
//! One-way password storage with:
//! - Argon2id hashing with a fixed work factor (memory-hard)
//! - A fresh random salt per hash, embedded in the PHC string
//! - Zeroization of clear text
//! - Constant-time comparison inside the Argon2 verifier
//!
//! ## Examples
//! ```rust
//! use platform::password::ClearTextPassword;
//!
//! let password = ClearTextPassword::new("pw123".to_string()).unwrap();
//! let hashed = password.hash(None).unwrap();
//! assert!(hashed.verify(&password, None));
//! ```

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Argon2id memory cost in KiB (19 MiB)
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2id iteration count
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2id lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Well-formed Argon2id hash with the production parameters that no
/// password verifies against
const DUMMY_PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$SlZwq3ksDjvuvlJrYZWrrg$411MzJ/HicTpJVq4EJoS5KU3GjTH1kaH6xTNdJ4q5TE";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Unicode is normalized using NFKC, then the password must be non-blank,
    /// at most [`MAX_PASSWORD_LENGTH`] code points, and free of control
    /// characters other than tab.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Create without validation (for testing)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Password bytes, with the pepper appended when one is configured
    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        let mut bytes = self.0.as_bytes().to_vec();
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let mut password_bytes = self.peppered(pepper);

        // Generate random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let result = hasher()?
            .hash_password(&password_bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        password_bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, parameters, salt and digest,
/// so verification needs nothing but the string itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored string without parsing it
    ///
    /// A corrupt value never verifies, so loading it is harmless.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Stand-in hash for an account that does not exist
    ///
    /// Verifying against it costs the same as verifying against a real
    /// hash and always fails.
    pub fn dummy() -> Self {
        Self {
            hash: DUMMY_PHC.to_string(),
        }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Returns `false` on mismatch and on a malformed hash; never panics.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };
        let Ok(argon2) = hasher() else {
            return false;
        };

        let mut password_bytes = password.peppered(pepper);
        // Argon2 uses constant-time comparison internally
        let valid = argon2
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok();
        password_bytes.zeroize();
        valid
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

/// Argon2id with the fixed work factor
fn hasher() -> Result<Argon2<'static>, PasswordHashError> {
    let params = Params::new(
        ARGON2_MEMORY_KIB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        None,
    )
    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_is_accepted() {
        assert!(ClearTextPassword::new("pw123".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert_eq!(
            ClearTextPassword::new("".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("   \t ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("pass\u{0007}word".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_nfkc_equivalent_passwords_verify() {
        // Fullwidth "ｐｗ１２３" normalizes to "pw123"
        let fullwidth = ClearTextPassword::new("ｐｗ１２３".to_string()).unwrap();
        let ascii = ClearTextPassword::new("pw123".to_string()).unwrap();
        let hashed = fullwidth.hash(None).unwrap();
        assert!(hashed.verify(&ascii, None));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new_unchecked("pw123".to_string());
        let hashed = password.hash(None).unwrap();

        assert_ne!(hashed.as_phc_string(), "pw123");
        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
        assert!(hashed.verify(&password, None));

        let wrong_password = ClearTextPassword::new_unchecked("pw124".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = ClearTextPassword::new_unchecked("pw123".to_string());
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_phc_string());
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = ClearTextPassword::new_unchecked("pw123".to_string());

        for stored in ["", "pw123", "$argon2id$", "$argon2id$v=19$m=1,t=1,p=1$$", "$2a$14$abc"] {
            assert!(!HashedPassword::from_stored(stored).verify(&password, None));
        }
    }

    #[test]
    fn test_dummy_hash_uses_production_params() {
        let password = ClearTextPassword::new_unchecked("pw123".to_string());
        let real = password.hash(None).unwrap();

        let dummy = HashedPassword::dummy();
        let dummy_parsed = PasswordHash::new(dummy.as_phc_string()).unwrap();
        let real_parsed = PasswordHash::new(real.as_phc_string()).unwrap();

        assert_eq!(dummy_parsed.algorithm, real_parsed.algorithm);
        assert_eq!(dummy_parsed.version, real_parsed.version);
        assert_eq!(dummy_parsed.params.to_string(), real_parsed.params.to_string());
        assert_eq!(
            dummy_parsed.hash.map(|h| h.len()),
            real_parsed.hash.map(|h| h.len())
        );
        assert!(!dummy.verify(&password, None));
        assert!(!dummy.verify(&password, Some(b"pepper")));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
