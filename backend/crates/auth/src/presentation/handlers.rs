//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        username: req.username,
        password: req.password,
        role: req.role,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user created successfully",
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
