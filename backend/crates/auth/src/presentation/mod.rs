//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, request gates and middleware.

pub mod dto;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use gate::{AuthenticationGate, Gate, GateContext, GatePipeline, RequestIdentity, RoleGate};
pub use handlers::AuthAppState;
pub use middleware::enforce;
pub use router::auth_router;
