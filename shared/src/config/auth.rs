//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing access tokens
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_SECRET),
            access_token_ttl_secs: 3600, // 1 hour
            issuer: String::from("legalease"),
        }
    }
}

impl AuthConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `JWT_SECRET` and `JWT_ACCESS_TOKEN_TTL` (seconds), falling back
    /// to development defaults when unset.
    pub fn from_env() -> Self {
        let jwt_secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let access_token_ttl_secs = std::env::var("JWT_ACCESS_TOKEN_TTL")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600);

        Self {
            jwt_secret,
            access_token_ttl_secs,
            issuer: String::from("legalease"),
        }
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }
}
