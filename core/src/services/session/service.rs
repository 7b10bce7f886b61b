//! Main session service implementation

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::entities::user::{Principal, User, UserRole};
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RefreshTokenStore, TokenBlacklist, UserRepository};
use crate::services::token::TokenCodec;

/// Session service orchestrating the token lifecycle
///
/// Holds its collaborators behind `Arc`s created at process start; all
/// results leave as plain data, never as shared mutable objects.
pub struct SessionService<U, R, B>
where
    U: UserRepository,
    R: RefreshTokenStore,
    B: TokenBlacklist,
{
    /// User directory for account creation and subject resolution
    users: Arc<U>,
    /// Store of opaque refresh tokens
    refresh_tokens: Arc<R>,
    /// Revocation set for access tokens
    blacklist: Arc<B>,
    /// Stateless codec for signed access tokens
    codec: Arc<TokenCodec>,
}

impl<U, R, B> SessionService<U, R, B>
where
    U: UserRepository,
    R: RefreshTokenStore,
    B: TokenBlacklist,
{
    /// Create a new session service
    pub fn new(
        users: Arc<U>,
        refresh_tokens: Arc<R>,
        blacklist: Arc<B>,
        codec: Arc<TokenCodec>,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            blacklist,
            codec,
        }
    }

    /// Register a new account and open its first session
    ///
    /// Parses the requested role, hashes the password with bcrypt and
    /// persists the account, then issues tokens exactly as `login` does.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - The new user plus access and refresh tokens
    /// * `Err(AuthError::InvalidRole)` - Role string not recognized
    /// * `Err(AuthError::EmailAlreadyExists)` - Identity already taken
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> DomainResult<AuthSession> {
        let role: UserRole = role.parse::<UserRole>()?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;

        let user = self
            .users
            .create(User::new(email, name, password_hash, role))
            .await?;

        info!(user_id = %user.id, role = %user.role, "registered new user");
        self.open_session(user).await
    }

    /// Authenticate credentials and open a new session
    ///
    /// A successful login never invalidates other active refresh tokens
    /// for the same subject; every device gets its own session.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Fresh access and refresh tokens
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("password verification failed: {e}"),
            })?;
        if !password_matches {
            warn!(user_id = %user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "login succeeded");
        self.open_session(user).await
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself is not rotated; it stays usable until an
    /// explicit logout or revocation.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - New signed access token
    /// * `Err(TokenError::InvalidRefreshToken)` - Token was never issued
    ///   or has been revoked
    /// * `Err(AuthError::UnknownSubject)` - Subject no longer resolves in
    ///   the directory
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let user_id = self
            .refresh_tokens
            .lookup(refresh_token)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        self.codec.issue(&user.principal())
    }

    /// Close a session, best-effort
    ///
    /// Revokes the refresh token if one is supplied (absence of the entry
    /// is not an error) and blacklists the access token if one is
    /// supplied. Supplying neither is a successful no-op.
    pub async fn logout(
        &self,
        refresh_token: Option<&str>,
        access_token: Option<&str>,
    ) -> DomainResult<()> {
        if let Some(token) = refresh_token {
            let revoked = self.refresh_tokens.revoke(token).await?;
            if !revoked {
                info!("logout presented an unknown refresh token");
            }
        }
        if let Some(token) = access_token {
            self.blacklist.add(token).await?;
        }
        Ok(())
    }

    /// The mandatory two-step request authentication check
    ///
    /// Order matters: (a) cryptographic verification via the codec, then
    /// (b) the blacklist. Both are required; skipping (b) would reopen a
    /// revoked session whose token still verifies.
    ///
    /// # Returns
    ///
    /// * `Ok(Principal)` - Token is valid and not revoked
    /// * `Err(TokenError::Revoked)` - Token verifies but was blacklisted
    pub async fn authenticate(&self, access_token: &str) -> DomainResult<Principal> {
        let principal = self.codec.verify(access_token)?;

        if self.blacklist.is_blacklisted(access_token).await? {
            return Err(TokenError::Revoked.into());
        }

        Ok(principal)
    }

    async fn open_session(&self, user: User) -> DomainResult<AuthSession> {
        let access_token = self.codec.issue(&user.principal())?;
        let refresh_token = self.refresh_tokens.create(user.id).await?;

        Ok(AuthSession {
            user,
            access_token,
            refresh_token,
        })
    }
}

/// Object-safe seam for request authentication
///
/// Lets the HTTP layer hold one trait object instead of threading the
/// service's generics through middleware.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Run the two-step check and return the token's principal
    async fn authenticate(&self, access_token: &str) -> DomainResult<Principal>;
}

#[async_trait]
impl<U, R, B> Authenticator for SessionService<U, R, B>
where
    U: UserRepository,
    R: RefreshTokenStore,
    B: TokenBlacklist,
{
    async fn authenticate(&self, access_token: &str) -> DomainResult<Principal> {
        SessionService::authenticate(self, access_token).await
    }
}
