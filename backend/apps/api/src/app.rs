//! Router Assembly

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, GatePipeline, TokenService, UserRole, auth_router};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use std::sync::Arc;
use tasks::domain::repository::TaskRepository;
use tasks::task_router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router over the given stores
///
/// Task writes require an admin token.
pub fn build_app<U, T>(users: U, tasks: T, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(config.clone()));
    let gates = Arc::new(GatePipeline::authenticated(tokens.clone()).require_role(UserRole::Admin));
    tracing::debug!(gates = ?gates.gate_names(), "Task writes gated");

    Router::new()
        .merge(auth_router(users, config, tokens))
        .merge(task_router(tasks, gates))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy for browser clients at `origins`
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
