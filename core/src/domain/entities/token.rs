//! Token entities for signed access tokens and stored refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::{Principal, UserRole};

/// Claims structure for the JWT payload of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Role of the subject
    pub role: UserRole,
}

impl Claims {
    /// Creates claims for an access token issued at the given instant
    pub fn new(
        principal: &Principal,
        issued_at: DateTime<Utc>,
        ttl: Duration,
        issuer: &str,
    ) -> Self {
        Self {
            sub: principal.subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
            iss: issuer.to_string(),
            role: principal.role,
        }
    }

    /// Reconstructs the principal these claims were minted for
    ///
    /// Fails when the subject is not a valid UUID.
    pub fn principal(&self) -> Result<Principal, uuid::Error> {
        Ok(Principal {
            subject: Uuid::parse_str(&self.sub)?,
            role: self.role,
        })
    }
}

/// Refresh token entry held by the store
///
/// Entries live for the process lifetime until explicitly revoked; there is
/// no expiry field. Only the SHA-256 digest of the token is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenRecord {
    /// SHA-256 digest of the opaque token string
    pub token_hash: String,

    /// User this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new record for a hashed token
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self {
            token_hash,
            user_id,
            created_at: Utc::now(),
        }
    }
}
