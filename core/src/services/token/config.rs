//! Configuration for the token codec

use le_shared::config::AuthConfig;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// JWT signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Issuer claim stamped into every token
    pub issuer: String,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            access_token_ttl_secs: 3600,
            issuer: "legalease".to_string(),
        }
    }
}

impl From<AuthConfig> for TokenCodecConfig {
    fn from(config: AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret,
            access_token_ttl_secs: config.access_token_ttl_secs,
            issuer: config.issuer,
        }
    }
}
