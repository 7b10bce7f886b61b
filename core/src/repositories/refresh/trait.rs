//! Refresh token store trait defining the interface for token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DomainResult;

/// Store mapping opaque refresh tokens to subject identifiers
///
/// Implementations must be safe under concurrent `create` / `lookup` /
/// `revoke` calls from many simultaneous requests: no insertion may be
/// lost, and a lookup that starts after a create for the same token has
/// completed observes the entry.
///
/// # Security Considerations
/// - Tokens are hashed before storage
/// - A token must carry enough entropy to be unguessable (>= 128 bits)
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Generate a fresh refresh token for a subject and store the mapping
    ///
    /// Multiple calls for the same subject create independent, equally
    /// valid entries: every device/session gets its own token, and
    /// creating a new one never invalidates prior ones.
    ///
    /// # Returns
    /// * `Ok(String)` - The raw opaque token, returned to the client once
    /// * `Err(DomainError)` - Store failure
    async fn create(&self, user_id: Uuid) -> DomainResult<String>;

    /// Resolve a refresh token to the subject it was issued for
    ///
    /// Does not mutate the store.
    ///
    /// # Returns
    /// * `Ok(Some(Uuid))` - Token known, mapped subject returned
    /// * `Ok(None)` - Token unknown (never issued or already revoked)
    /// * `Err(DomainError)` - Store failure
    async fn lookup(&self, token: &str) -> DomainResult<Option<Uuid>>;

    /// Remove a refresh token mapping
    ///
    /// Revoking an absent token reports `false` but must not corrupt
    /// state; the call is idempotent from the caller's perspective.
    ///
    /// # Returns
    /// * `Ok(true)` - Token was present and removed
    /// * `Ok(false)` - Token not found
    /// * `Err(DomainError)` - Store failure
    async fn revoke(&self, token: &str) -> DomainResult<bool>;
}
