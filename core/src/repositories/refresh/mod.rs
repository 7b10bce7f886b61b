//! Refresh token store: opaque token to subject mapping

mod memory;
mod r#trait;

pub use memory::InMemoryRefreshTokenStore;
pub use r#trait::RefreshTokenStore;
