//! Authentication HTTP handlers
//!
//! - `POST /api/auth/register` - create an account, returns token + user
//! - `POST /api/auth/login` - verify credentials, returns token + user
//! - `GET /api/auth/me` - current user record

mod login;
mod me;
mod register;
pub mod types;

pub use login::login;
pub use me::get_me;
pub use register::register;
