//! User repository trait defining the interface to the user directory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Directory of registered accounts
///
/// The session subsystem only reads identities from here and writes new
/// accounts during registration; profile CRUD lives with the owning
/// collaborator. A refresh token can outlive its subject, so lookups by id
/// may legitimately come back empty.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(User)` - The saved account
    /// * `Err(DomainError)` - `AuthError::EmailAlreadyExists` on duplicate
    ///   email, or a directory failure
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Find an account by email
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find an account by id
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Remove an account
    ///
    /// # Returns
    /// * `Ok(true)` - Account existed and was removed
    /// * `Ok(false)` - No such account
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;
}
