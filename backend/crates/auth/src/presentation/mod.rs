//! Presentation Layer
//!
//! HTTP handlers, DTOs, route entries, and the bearer-token middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{BearerGate, require_bearer};
pub use router::auth_routes;
