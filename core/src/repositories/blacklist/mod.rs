//! Access token blacklist: revocation before natural expiry

mod memory;
mod r#trait;

pub use memory::InMemoryTokenBlacklist;
pub use r#trait::TokenBlacklist;
