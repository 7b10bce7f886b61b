//! Error types for authentication and token lifecycle operations
//!
//! Every failure here is scoped to the single request that triggered it;
//! none of these errors is fatal to the process.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("Subject no longer exists")]
    UnknownSubject,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    GenerationFailed,

    #[error("Signing secret must be at least {min_bytes} bytes")]
    WeakSecret { min_bytes: usize },
}
