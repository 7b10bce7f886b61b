//! User entity and the identity principal minted into access tokens.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AuthError;

/// Role of a registered user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// A client seeking legal services
    Client,
    /// A lawyer offering legal services
    Lawyer,
    /// A platform administrator
    Admin,
}

impl FromStr for UserRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLIENT" => Ok(UserRole::Client),
            "LAWYER" => Ok(UserRole::Lawyer),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(AuthError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Client => "CLIENT",
            UserRole::Lawyer => "LAWYER",
            UserRole::Admin => "ADMIN",
        };
        write!(f, "{}", s)
    }
}

/// User entity representing a registered account
///
/// Account storage itself is an external collaborator concern; this entity
/// carries only what the session subsystem needs to mint and resolve tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across the directory
    pub email: String,

    /// Display name
    pub name: String,

    /// bcrypt hash of the user's password
    pub password_hash: String,

    /// Role of the user
    pub role: UserRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh id
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        }
    }

    /// The identity principal this user authenticates as
    pub fn principal(&self) -> Principal {
        Principal {
            subject: self.id,
            role: self.role,
        }
    }
}

/// Immutable identity a token represents: subject plus role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier (user id)
    pub subject: Uuid,

    /// Role of the subject
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("client".parse::<UserRole>().unwrap(), UserRole::Client);
        assert_eq!("LAWYER".parse::<UserRole>().unwrap(), UserRole::Lawyer);
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "paralegal".parse::<UserRole>().unwrap_err();
        assert!(matches!(err, AuthError::InvalidRole { role } if role == "paralegal"));
    }

    #[test]
    fn role_displays_in_wire_form() {
        assert_eq!(UserRole::Client.to_string(), "CLIENT");
    }

    #[test]
    fn principal_carries_id_and_role() {
        let user = User::new("a@example.com", "A", "hash", UserRole::Lawyer);
        let principal = user.principal();
        assert_eq!(principal.subject, user.id);
        assert_eq!(principal.role, UserRole::Lawyer);
    }
}
