//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let password = ClearTextPassword::new(input.password);

        // Argon2 is CPU-bound; keep it off the async workers.
        let password_hash = tokio::task::spawn_blocking(move || password.hash())
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))??;

        let user = User::new(input.username, password_hash);

        // Uniqueness is enforced by the store, not by a prior lookup.
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
