//! Configuration module
//!
//! Configuration is split by concern:
//! - `auth` - JWT signing secret and token lifetimes
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod server;

pub use auth::AuthConfig;
pub use server::ServerConfig;
