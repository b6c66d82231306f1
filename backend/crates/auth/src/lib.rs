//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, token claims, repository trait
//! - `application/` - Register / login / token authentication use cases
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, route entries
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned or logged
//! - Stateless HS256 bearer tokens carrying `{id, username}`
//! - No expiry and no revocation: a token stays valid as long as its signature verifies

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::auth_routes;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
