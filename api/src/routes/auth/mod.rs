//! Authentication route handlers
//!
//! This module contains the session lifecycle endpoints:
//! - Registration and login (credentials in, token pair out)
//! - Access token refresh
//! - Logout (refresh token revocation + access token blacklisting)

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use le_core::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};
use le_core::services::session::SessionService;

/// Shared application state handed to every auth handler
pub struct AppState<U, R, B>
where
    U: UserRepository,
    R: RefreshTokenStore,
    B: TokenBlacklist,
{
    /// Session service orchestrating the token lifecycle
    pub session_service: Arc<SessionService<U, R, B>>,
}
