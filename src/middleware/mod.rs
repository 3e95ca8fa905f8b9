//! Request-processing middleware

pub mod auth;

pub use auth::AuthUser;
