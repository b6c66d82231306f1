//! Login Use Case
//!
//! Verifies credentials and issues a bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{token_claims::TokenClaims, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    pub user_id: UserId,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    signer: Arc<TokenSigner>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, signer: Arc<TokenSigner>) -> Self {
        Self { user_repo, signer }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .user_repo
            .find_by_user_name(&input.username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = ClearTextPassword::new(input.password);
        let stored_hash = user.password_hash.clone();

        let password_valid =
            tokio::task::spawn_blocking(move || stored_hash.verify(&password))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.signer.issue(&TokenClaims::for_user(&user))?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    async fn setup() -> (LoginUseCase<InMemoryUserRepository>, Arc<TokenSigner>, UserId) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let registered = RegisterUseCase::new(repo.clone())
            .execute(RegisterInput {
                username: "a".to_string(),
                password: "p".to_string(),
            })
            .await
            .unwrap();

        let signer = Arc::new(TokenSigner::new(b"login-test-secret"));
        (
            LoginUseCase::new(repo, signer.clone()),
            signer,
            registered.user_id,
        )
    }

    fn input(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_decodable_token() {
        let (use_case, signer, user_id) = setup().await;

        let output = use_case.execute(input("a", "p")).await.unwrap();
        assert_eq!(output.user_id, user_id);

        let claims: TokenClaims = signer.verify(&output.token).unwrap();
        assert_eq!(claims.id, user_id.into_uuid());
        assert_eq!(claims.username, "a");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (use_case, _, _) = setup().await;
        let result = use_case.execute(input("a", "wrong")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (use_case, _, _) = setup().await;
        let result = use_case.execute(input("nobody", "p")).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }
}
