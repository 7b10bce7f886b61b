//! User directory: the external-collaborator seam for account resolution

mod memory;
mod r#trait;

pub use memory::InMemoryUserRepository;
pub use r#trait::UserRepository;
