//! In-memory implementation of the user directory

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};

use super::r#trait::UserRepository;

/// Process-resident user directory backing the demo server and tests
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyExists.into());
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::UserRole;

    fn sample_user(email: &str) -> User {
        User::new(email, "Sample User", "hash", UserRole::Client)
    }

    #[tokio::test]
    async fn created_user_is_findable_by_email_and_id() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(sample_user("alice@example.com")).await.unwrap();

        let by_email = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id), Some(user.id));
        assert!(repo.find_by_id(user.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("bob@example.com")).await.unwrap();

        let err = repo.create(sample_user("bob@example.com")).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Auth(AuthError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn deleted_user_no_longer_resolves() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(sample_user("gone@example.com")).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
        assert!(!repo.delete(user.id).await.unwrap());
    }
}
