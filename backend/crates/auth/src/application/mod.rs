//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{TokenError, TokenService};
