//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    /// Role code; `member` when absent
    pub role: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub username: UserName,
    pub role: UserRole,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate user name
        let username =
            UserName::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;

        let role = match input.role.as_deref() {
            None => UserRole::default(),
            Some(code) => code
                .parse::<UserRole>()
                .map_err(|e| AuthError::Validation(e.to_string()))?,
        };

        let raw_password = RawPassword::new(input.password)?;

        // Read-then-write; the store itself does not enforce uniqueness
        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash =
            UserPassword::hash(raw_password, self.config.password_pepper.clone()).await?;

        let user = User::new(username, password_hash, role);
        self.user_repo.create(&user).await?;

        tracing::info!(
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(RegisterOutput {
            username: user.username,
            role: user.role,
        })
    }
}
