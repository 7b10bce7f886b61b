//! In-memory implementation of the refresh token store

use std::collections::HashMap;

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainResult;
use crate::repositories::hash_token;

use super::r#trait::RefreshTokenStore;

/// Length of generated refresh tokens (alphanumeric, ~5.95 bits per char)
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Process-resident refresh token store
///
/// Entries survive for the process lifetime until revoked; there is no
/// automatic expiry sweep. Keys are SHA-256 digests of the raw token.
pub struct InMemoryRefreshTokenStore {
    tokens: RwLock<HashMap<String, RefreshTokenRecord>>,
}

impl InMemoryRefreshTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live entries, for observability
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    fn generate_token() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl Default for InMemoryRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn create(&self, user_id: Uuid) -> DomainResult<String> {
        let mut tokens = self.tokens.write().await;
        // Collisions are overwhelmingly improbable at 190 bits of entropy,
        // but regenerating under the write lock costs nothing.
        loop {
            let raw = Self::generate_token();
            let token_hash = hash_token(&raw);
            if !tokens.contains_key(&token_hash) {
                tokens.insert(
                    token_hash.clone(),
                    RefreshTokenRecord::new(user_id, token_hash),
                );
                return Ok(raw);
            }
        }
    }

    async fn lookup(&self, token: &str) -> DomainResult<Option<Uuid>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&hash_token(token)).map(|record| record.user_id))
    }

    async fn revoke(&self, token: &str) -> DomainResult<bool> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(&hash_token(token)).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn create_then_lookup_returns_subject() {
        let store = InMemoryRefreshTokenStore::new();
        let user_id = Uuid::new_v4();

        let token = store.create(user_id).await.unwrap();
        assert_eq!(token.len(), REFRESH_TOKEN_LENGTH);
        assert_eq!(store.lookup(&token).await.unwrap(), Some(user_id));
    }

    #[tokio::test]
    async fn lookup_of_unknown_token_is_none() {
        let store = InMemoryRefreshTokenStore::new();
        assert_eq!(store.lookup("never-issued").await.unwrap(), None);
    }

    #[tokio::test]
    async fn revoke_removes_mapping_and_is_idempotent() {
        let store = InMemoryRefreshTokenStore::new();
        let token = store.create(Uuid::new_v4()).await.unwrap();

        assert!(store.revoke(&token).await.unwrap());
        assert_eq!(store.lookup(&token).await.unwrap(), None);
        // Second revoke reports not-found without corrupting anything
        assert!(!store.revoke(&token).await.unwrap());
    }

    #[tokio::test]
    async fn same_subject_gets_independent_tokens() {
        let store = InMemoryRefreshTokenStore::new();
        let user_id = Uuid::new_v4();

        let first = store.create(user_id).await.unwrap();
        let second = store.create(user_id).await.unwrap();
        assert_ne!(first, second);

        assert!(store.revoke(&first).await.unwrap());
        // Revoking one session leaves the other intact
        assert_eq!(store.lookup(&second).await.unwrap(), Some(user_id));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_lose_no_insertions() {
        let store = Arc::new(InMemoryRefreshTokenStore::new());

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let user_id = Uuid::new_v4();
                    let token = store.create(user_id).await.unwrap();
                    (user_id, token)
                })
            })
            .collect();

        for handle in handles {
            let (user_id, token) = handle.await.unwrap();
            assert_eq!(store.lookup(&token).await.unwrap(), Some(user_id));
        }
        assert_eq!(store.len().await, 64);
    }
}
