//! In-memory implementation of the access token blacklist

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::DomainResult;
use crate::repositories::hash_token;

use super::r#trait::TokenBlacklist;

/// Process-resident, grow-only revocation set
///
/// Stores SHA-256 digests of the exact token strings. Unbounded growth is
/// a known limitation of this design, not a handled error.
pub struct InMemoryTokenBlacklist {
    entries: RwLock<HashSet<String>>,
}

impl InMemoryTokenBlacklist {
    /// Create an empty blacklist
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashSet::new()),
        }
    }
}

impl Default for InMemoryTokenBlacklist {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn add(&self, token: &str) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(hash_token(token));
        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> DomainResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains(&hash_token(token)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn added_token_is_blacklisted() {
        let blacklist = InMemoryTokenBlacklist::new();
        blacklist.add("revoked-token").await.unwrap();

        assert!(blacklist.is_blacklisted("revoked-token").await.unwrap());
        assert!(!blacklist.is_blacklisted("other-token").await.unwrap());
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let blacklist = InMemoryTokenBlacklist::new();
        blacklist.add("tok").await.unwrap();
        blacklist.add("tok").await.unwrap();
        assert!(blacklist.is_blacklisted("tok").await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn entries_are_visible_to_concurrent_readers() {
        let blacklist = Arc::new(InMemoryTokenBlacklist::new());

        let writers: Vec<_> = (0..32)
            .map(|i| {
                let blacklist = Arc::clone(&blacklist);
                tokio::spawn(async move { blacklist.add(&format!("token-{i}")).await.unwrap() })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        for i in 0..32 {
            assert!(blacklist
                .is_blacklisted(&format!("token-{i}"))
                .await
                .unwrap());
        }
    }
}
