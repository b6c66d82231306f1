//! API server library
//!
//! Configuration, route table and middleware chain. `main.rs` only picks
//! the stores and starts listening, so tests drive the same router.

pub mod config;
pub mod routes;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
