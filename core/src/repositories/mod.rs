//! Repository traits and their process-resident implementations
//!
//! The traits are the seams the session service composes over; the
//! in-memory implementations back the running server (persistence across
//! restarts is explicitly out of scope) and the tests.

pub mod blacklist;
pub mod refresh;
pub mod user;

pub use blacklist::{InMemoryTokenBlacklist, TokenBlacklist};
pub use refresh::{InMemoryRefreshTokenStore, RefreshTokenStore};
pub use user::{InMemoryUserRepository, UserRepository};

use sha2::{Digest, Sha256};

/// Digest a token string for storage
///
/// Raw token strings never reach a map key; only their SHA-256 digest does.
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::hash_token;

    #[test]
    fn hash_is_stable_and_hex_encoded() {
        let a = hash_token("some-token");
        let b = hash_token("some-token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_token("other-token"));
    }
}
