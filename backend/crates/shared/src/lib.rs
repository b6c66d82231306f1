//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers for users and contacts
//! - The authenticated identity attached to protected requests
//! - Declarative route entries (with the `axum` feature)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod identity;
#[cfg(feature = "axum")]
pub mod route;
