//! Blacklist trait for revoking access tokens before expiry.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Revocation set for access tokens
///
/// Signature verification alone cannot know about post-hoc revocation, so
/// logout records the exact token here and every request-authentication
/// check consults the set after the cryptographic checks pass.
///
/// The set only grows; nothing in this subsystem removes entries.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Record a token as revoked; idempotent
    async fn add(&self, token: &str) -> DomainResult<()>;

    /// Check whether a token has been revoked
    ///
    /// Safe to call concurrently with writes: a reader sees either the
    /// pre-add or post-add state, never a torn value.
    async fn is_blacklisted(&self, token: &str) -> DomainResult<bool>;
}
