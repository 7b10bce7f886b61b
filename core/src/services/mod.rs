//! Business services composing the domain layer

pub mod session;
pub mod token;

pub use session::{Authenticator, SessionService};
pub use token::{TokenCodec, TokenCodecConfig};
