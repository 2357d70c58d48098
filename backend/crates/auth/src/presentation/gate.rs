//! Request Gates
//!
//! Protected routes run an ordered list of gates before the handler. Each
//! gate either passes the [`GateContext`] on (possibly enriched) or stops
//! the request with an [`AuthError`].
//!
//! [`GatePipeline::authenticated`] always places the [`AuthenticationGate`]
//! first, so a role check never runs without an identity to check.
//!
//! ```rust,ignore
//! let pipeline = GatePipeline::authenticated(tokens).require_role(UserRole::Admin);
//! let identity = pipeline.run(req.headers())?;
//! ```

use axum::http::HeaderMap;
use platform::bearer::{BearerError, extract_bearer};
use std::sync::Arc;

use crate::application::token::{TokenError, TokenService};
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// Caller identity established by the authentication gate
///
/// Lives in the request extensions for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    pub username: String,
    pub role: UserRole,
}

/// State threaded through the gates of one request
#[derive(Debug, Clone, Default)]
pub struct GateContext {
    identity: Option<RequestIdentity>,
}

impl GateContext {
    pub fn identity(&self) -> Option<&RequestIdentity> {
        self.identity.as_ref()
    }

    pub fn with_identity(mut self, identity: RequestIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn into_identity(self) -> Option<RequestIdentity> {
        self.identity
    }
}

/// A single admission check
pub trait Gate: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    fn check(&self, headers: &HeaderMap, ctx: GateContext) -> AuthResult<GateContext>;
}

// ============================================================================
// Authentication
// ============================================================================

/// Verifies the bearer token and records who the caller is
pub struct AuthenticationGate {
    tokens: Arc<TokenService>,
}

impl AuthenticationGate {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl Gate for AuthenticationGate {
    fn name(&self) -> &'static str {
        "authentication"
    }

    fn check(&self, headers: &HeaderMap, ctx: GateContext) -> AuthResult<GateContext> {
        let token = extract_bearer(headers).map_err(|e| match e {
            BearerError::Missing => AuthError::MissingCredential,
            BearerError::NotBearer => AuthError::Token(TokenError::Malformed),
        })?;

        let claims = self.tokens.verify(token)?;

        Ok(ctx.with_identity(RequestIdentity {
            username: claims.username,
            role: claims.role,
        }))
    }
}

// ============================================================================
// Authorization
// ============================================================================

/// Admits only callers holding exactly `required`
pub struct RoleGate {
    required: UserRole,
}

impl RoleGate {
    pub fn new(required: UserRole) -> Self {
        Self { required }
    }
}

impl Gate for RoleGate {
    fn name(&self) -> &'static str {
        "authorization"
    }

    fn check(&self, _headers: &HeaderMap, ctx: GateContext) -> AuthResult<GateContext> {
        match ctx.identity() {
            Some(identity) if identity.role == self.required => Ok(ctx),
            _ => Err(AuthError::Forbidden),
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Ordered gate list, authentication first
pub struct GatePipeline {
    gates: Vec<Box<dyn Gate>>,
}

impl GatePipeline {
    /// Pipeline that only authenticates
    pub fn authenticated(tokens: Arc<TokenService>) -> Self {
        Self {
            gates: vec![Box::new(AuthenticationGate::new(tokens))],
        }
    }

    /// Append a role requirement
    pub fn require_role(self, role: UserRole) -> Self {
        self.with_gate(RoleGate::new(role))
    }

    /// Append a gate after those already installed
    pub fn with_gate(mut self, gate: impl Gate + 'static) -> Self {
        self.gates.push(Box::new(gate));
        self
    }

    pub fn gate_names(&self) -> Vec<&'static str> {
        self.gates.iter().map(|g| g.name()).collect()
    }

    /// Run every gate in order, stopping at the first failure
    pub fn run(&self, headers: &HeaderMap) -> AuthResult<RequestIdentity> {
        let ctx = self
            .gates
            .iter()
            .try_fold(GateContext::default(), |ctx, gate| {
                gate.check(headers, ctx).inspect_err(|e| {
                    tracing::debug!(gate = gate.name(), error = %e, "Request rejected by gate");
                })
            })?;

        ctx.into_identity().ok_or(AuthError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use axum::http::{HeaderValue, header};

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(Arc::new(AuthConfig::development())))
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn test_authentication_first() {
        let pipeline = GatePipeline::authenticated(tokens()).require_role(UserRole::Admin);
        assert_eq!(pipeline.gate_names(), vec!["authentication", "authorization"]);
    }

    #[test]
    fn test_missing_header() {
        let pipeline = GatePipeline::authenticated(tokens()).require_role(UserRole::Admin);
        assert!(matches!(
            pipeline.run(&HeaderMap::new()),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn test_non_bearer_header_is_malformed() {
        let tokens = tokens();
        let token = tokens.issue("alice", UserRole::Admin).unwrap();
        let pipeline = GatePipeline::authenticated(tokens);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&token).unwrap());

        assert!(matches!(
            pipeline.run(&headers),
            Err(AuthError::Token(TokenError::Malformed))
        ));
    }

    #[test]
    fn test_member_is_forbidden() {
        let tokens = tokens();
        let token = tokens.issue("bob", UserRole::Member).unwrap();
        let pipeline = GatePipeline::authenticated(tokens).require_role(UserRole::Admin);

        assert!(matches!(pipeline.run(&bearer(&token)), Err(AuthError::Forbidden)));
    }

    #[test]
    fn test_admin_passes() {
        let tokens = tokens();
        let token = tokens.issue("alice", UserRole::Admin).unwrap();
        let pipeline = GatePipeline::authenticated(tokens).require_role(UserRole::Admin);

        let identity = pipeline.run(&bearer(&token)).unwrap();
        assert_eq!(
            identity,
            RequestIdentity {
                username: "alice".to_string(),
                role: UserRole::Admin,
            }
        );
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let foreign = tokens().issue("alice", UserRole::Admin).unwrap();
        let pipeline = GatePipeline::authenticated(tokens()).require_role(UserRole::Admin);

        assert!(matches!(
            pipeline.run(&bearer(&foreign)),
            Err(AuthError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_role_gate_without_identity() {
        let gate = RoleGate::new(UserRole::Admin);
        assert!(matches!(
            gate.check(&HeaderMap::new(), GateContext::default()),
            Err(AuthError::Forbidden)
        ));
    }
}
