//! User Entity

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::user_id::UserId;

/// A registered account.
///
/// Created once on registration and never mutated. `password_hash` is
/// redacted from `Debug` and has no serializer, so it cannot leak into a
/// response body.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login name, stored as sent
    pub username: String,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: String, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
