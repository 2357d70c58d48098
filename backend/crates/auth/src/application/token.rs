//! Session Token Service
//!
//! Issues and verifies compact HS256 JWTs signed with the process-wide
//! secret from [`AuthConfig`].
//!
//! The signature over everything before the last `.` is checked before the
//! token is decoded, so a token that was altered anywhere fails with
//! [`TokenError::InvalidSignature`] rather than a parse error. Expiry is
//! checked against the caller's clock so `verify_at` stays deterministic.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::application::config::AuthConfig;
use crate::domain::entity::claims::Claims;
use crate::domain::value_object::user_role::UserRole;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Token issuer and verifier bound to one signing secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        // `exp` is compared with the clock handed to `verify_at`
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret()),
            decoding_key: DecodingKey::from_secret(config.token_secret()),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for `username` valid for the configured TTL from now
    pub fn issue(&self, username: &str, role: UserRole) -> Result<String, TokenError> {
        self.issue_at(username, role, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (UNIX seconds)
    pub fn issue_at(&self, username: &str, role: UserRole, now: i64) -> Result<String, TokenError> {
        let claims = Claims::new(username, role, now, self.ttl_secs);

        jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::from)
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now` (UNIX seconds)
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let (signing_input, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;

        let signed = jsonwebtoken::crypto::verify(
            signature,
            signing_input.as_bytes(),
            &self.decoding_key,
            ALGORITHM,
        )
        .unwrap_or(false);
        if !signed {
            return Err(TokenError::InvalidSignature);
        }

        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?
            .claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &ALGORITHM)
            .field("keys", &"[REDACTED]")
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
