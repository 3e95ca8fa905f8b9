//! Authentication and user records
//!
//! Registration, login, JWT session tokens, and the user store operations
//! every other module builds on. Passwords are bcrypt-hashed and never
//! serialized back to callers.

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::{get_me, login, register};
pub use users::{User, UserProfile};
