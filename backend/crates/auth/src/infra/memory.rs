//! In-memory credential store
//!
//! Backs `DB_URI=memory://` runs and the test suites.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Users keyed by username
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, username: &str) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn user(name: &str) -> User {
        let hash = ClearTextPassword::new("p".to_string()).hash().unwrap();
        User::new(name.to_string(), hash)
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let alice = user("alice");
        repo.create(&alice).await.unwrap();

        let found = repo.find_by_user_name("alice").await.unwrap().unwrap();
        assert_eq!(found.user_id, alice.user_id);
        assert!(repo.find_by_user_name("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();

        let result = repo.create(&user("alice")).await;
        assert!(matches!(result, Err(AuthError::UserNameTaken)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice")).await.unwrap();
        repo.create(&user("Alice")).await.unwrap();
        assert_eq!(repo.len().await, 2);
    }
}
