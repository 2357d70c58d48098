//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
pub fn auth_router<R>(repo: R, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
