//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by every bounded context of the task service:
//! - Unified error type and result alias
//! - Error classification mapped onto HTTP status codes
//! - Request body extraction that reports failures as [`error::app_error::AppError`]

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

#[cfg(feature = "axum")]
pub mod extract;
