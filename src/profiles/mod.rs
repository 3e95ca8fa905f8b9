//! Profile management and user directory
//!
//! - `PUT /api/users/profile` - partial update of the caller's profile
//! - `GET /api/users/{id}` - look up a single user
//! - `GET /api/users` - directory search (profession filter, name search)

pub mod handlers;

pub use handlers::{get_user, list_users, update_profile};
