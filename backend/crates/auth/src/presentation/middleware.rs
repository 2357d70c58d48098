//! Auth Middleware
//!
//! Runs a [`GatePipeline`] in front of protected routes:
//!
//! ```rust,ignore
//! let gate = middleware::from_fn_with_state(pipeline, auth::middleware::enforce);
//! Router::new().route("/tasks", get(list).merge(post(create).route_layer(gate)));
//! ```

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::error::AuthError;
use crate::presentation::gate::{GatePipeline, RequestIdentity};

/// Middleware that admits a request only if every gate passes
///
/// The established [`RequestIdentity`] is placed in the request extensions.
pub async fn enforce(
    State(pipeline): State<Arc<GatePipeline>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = pipeline.run(req.headers())?;

    tracing::debug!(
        username = %identity.username,
        role = %identity.role,
        "Request admitted"
    );

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract the identity set by [`enforce`]
///
/// On a route without the middleware this fails with `MissingCredential`.
impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .ok_or(AuthError::MissingCredential)
    }
}
