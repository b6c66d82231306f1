//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user.
    ///
    /// Fails with `AuthError::UserNameTaken` when the username exists.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact username
    async fn find_by_user_name(&self, username: &str) -> AuthResult<Option<User>>;
}
