//! Bearer token claims

use chrono::Utc;
use kernel::identity::Identity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::user::User;

/// Identity payload signed into every token.
///
/// Deliberately has no `exp`: tokens do not expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub id: Uuid,
    pub username: String,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
}

impl TokenClaims {
    pub fn for_user(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            username: user.username.clone(),
            iat: Utc::now().timestamp(),
        }
    }

    pub fn into_identity(self) -> Identity {
        Identity {
            user_id: self.id.into(),
            username: self.username,
        }
    }
}
