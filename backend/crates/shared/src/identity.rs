//! Authenticated identity
//!
//! The verified token claims that the auth gate attaches to a request before
//! a protected handler runs.

use crate::id::UserId;

/// Who is making the request.
///
/// Only present in request extensions behind the bearer-token gate; handlers
/// read it with `Extension<Identity>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
}
