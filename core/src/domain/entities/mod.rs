pub mod token;
pub mod user;

pub use token::{Claims, RefreshTokenRecord};
pub use user::{Principal, User, UserRole};
