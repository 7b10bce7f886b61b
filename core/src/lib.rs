//! # LegalEase Core
//!
//! Core session and token lifecycle subsystem for the LegalEase backend.
//! This crate contains the domain entities, the signed token codec, the
//! refresh token store, the access token blacklist, and the session service
//! that composes them into the register / login / refresh / logout flows.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
