//! In-Process Repository Implementation
//!
//! Used when no database is configured, and by tests. Contents are lost on
//! restart.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Vector-backed user repository
///
/// Insertion order is kept, and lookups return the first match.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
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
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| &u.username == username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{user_password::UserPassword, user_role::UserRole};

    fn user(name: &str, role: UserRole) -> User {
        User::new(
            UserName::new(name).unwrap(),
            UserPassword::from_stored("$argon2id$placeholder"),
            role,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.is_empty().await);

        repo.create(&user("alice", UserRole::Admin)).await.unwrap();

        let alice = UserName::new("alice").unwrap();
        assert!(repo.exists_by_username(&alice).await.unwrap());
        let found = repo.find_by_username(&alice).await.unwrap().unwrap();
        assert_eq!(found.role, UserRole::Admin);

        let bob = UserName::new("bob").unwrap();
        assert!(!repo.exists_by_username(&bob).await.unwrap());
        assert!(repo.find_by_username(&bob).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let repo = InMemoryUserRepository::new();
        repo.create(&user("alice", UserRole::Member)).await.unwrap();
        repo.create(&user("alice", UserRole::Admin)).await.unwrap();

        assert_eq!(repo.len().await, 2);
        let found = repo
            .find_by_username(&UserName::new("alice").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.role, UserRole::Member);
    }
}
