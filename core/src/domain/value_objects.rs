//! Value objects returned by the session service.

use crate::domain::entities::user::User;

/// An authenticated session: the resolved user plus freshly issued tokens
///
/// Returned by register and login. Plain data; no shared mutable state
/// escapes the subsystem through it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The user the session belongs to
    pub user: User,

    /// Signed, short-lived access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}
