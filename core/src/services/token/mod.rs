//! Signed token codec module
//!
//! Stateless creation and verification of self-contained access tokens:
//! - HS256-signed JWTs carrying subject, issued-at, expires-at and role
//! - No stored state; verification is a pure function of the token string,
//!   the key and the clock

mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use codec::{TokenCodec, MIN_SECRET_BYTES};
pub use config::TokenCodecConfig;
