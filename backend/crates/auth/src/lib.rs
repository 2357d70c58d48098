//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - PostgreSQL and in-process repositories
//! - `presentation/` - HTTP handlers, DTOs, router, request gates
//!
//! ## Features
//! - User registration with username + password and a role
//! - Login issuing a signed bearer token (HS256, 24 hour lifetime)
//! - Gate pipeline (authentication, then role) for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Tokens are stateless; the signing secret is fixed for the process
//! - Login failures are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, TokenService};
pub use domain::value_object::user_role::UserRole;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::gate::{GatePipeline, RequestIdentity};
pub use presentation::router::auth_router;

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
