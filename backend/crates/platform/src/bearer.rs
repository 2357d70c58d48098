//! Bearer Credential Extraction
//!
//! Parses `Authorization: Bearer <token>` (RFC 6750 §2.1).

use axum::http::{HeaderMap, header};

const SCHEME: &str = "Bearer";

/// Why no bearer token could be taken from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Missing Authorization header")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Authorization header is not a bearer credential")]
    NotBearer,
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively and must be followed by at
/// least one space and a non-empty token. Anything else is
/// [`BearerError::NotBearer`], including values that are not visible ASCII.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::NotBearer)?;

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::NotBearer)?;
    if !scheme.eq_ignore_ascii_case(SCHEME) {
        return Err(BearerError::NotBearer);
    }

    let token = token.trim_matches(' ');
    if token.is_empty() || token.contains(' ') {
        return Err(BearerError::NotBearer);
    }

    Ok(token)
}
