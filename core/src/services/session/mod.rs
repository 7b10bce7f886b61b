//! Session orchestration module
//!
//! Composes the token codec, refresh token store and access token
//! blacklist into the register / login / refresh / logout flows and the
//! two-step request authentication check.

mod service;


pub use service::{Authenticator, SessionService};
