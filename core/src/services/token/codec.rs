//! Token codec implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::Principal;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenCodecConfig;

/// Minimum signing secret length in bytes (256 bits of key material)
///
/// Shorter secrets are rejected outright rather than padded; padding would
/// silently reduce the effective entropy of the signing key.
pub const MIN_SECRET_BYTES: usize = 32;

/// Stateless codec producing and verifying signed access tokens
///
/// Deterministic given identical inputs and key. Holds only the immutable
/// key material, so it is safe to share across workers without locks.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    issuer: String,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material intentionally omitted: it must never reach logs.
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a new codec from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(TokenCodec)` - Ready-to-use codec
    /// * `Err(TokenError::WeakSecret)` - Secret shorter than [`MIN_SECRET_BYTES`]
    pub fn new(config: TokenCodecConfig) -> DomainResult<Self> {
        if config.secret.len() < MIN_SECRET_BYTES {
            return Err(TokenError::WeakSecret {
                min_bytes: MIN_SECRET_BYTES,
            }
            .into());
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: Duration::seconds(config.access_token_ttl_secs),
            issuer: config.issuer,
        })
    }

    /// Issues a signed access token for a principal, valid from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact JWT encoding `{sub, iat, exp, iss, role}`
    /// * `Err(TokenError::GenerationFailed)` - Encoding failed
    pub fn issue(&self, principal: &Principal) -> DomainResult<String> {
        self.issue_at(principal, Utc::now())
    }

    /// Issues a token with issuance pinned to a supplied timestamp
    ///
    /// `issue` delegates here; tests use it to mint already-expired tokens.
    pub fn issue_at(
        &self,
        principal: &Principal,
        issued_at: DateTime<Utc>,
    ) -> DomainResult<String> {
        let claims = Claims::new(principal, issued_at, self.ttl, &self.issuer);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies a token and returns the principal it was minted for
    ///
    /// Pure function of the token string, the key and the current time:
    /// no I/O, no shared state. Blacklist consultation is the session
    /// service's job and happens after this check.
    ///
    /// # Returns
    ///
    /// * `Ok(Principal)` - Signature and expiry are valid
    /// * `Err(TokenError::Expired)` - Token past its expires-at
    /// * `Err(TokenError::InvalidSignature)` - Signature mismatch
    /// * `Err(TokenError::InvalidFormat)` - Malformed token or claims
    pub fn verify(&self, token: &str) -> DomainResult<Principal> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                DomainError::Token(match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidFormat,
                })
            })?;

        token_data
            .claims
            .principal()
            .map_err(|_| DomainError::Token(TokenError::InvalidFormat))
    }

    /// Access token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
