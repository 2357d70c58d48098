//! Login Use Case
//!
//! Checks a username/password pair and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    /// Every failure on the credential path is `InvalidCredentials`, so the
    /// response does not reveal whether the username exists.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.user_repo.find_by_username(&username).await?;

        // An unknown user still pays for one full verification.
        let stored = user
            .as_ref()
            .map_or_else(UserPassword::dummy, |u| u.password_hash.clone());
        let valid = stored
            .verify(raw_password, self.config.password_pepper.clone())
            .await;

        let user = match user {
            Some(user) if valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self
            .tokens
            .issue(user.username.as_str(), user.role)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(
            username = %user.username,
            role = %user.role,
            "User logged in"
        );

        Ok(LoginOutput { token })
    }
}
