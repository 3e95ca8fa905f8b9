//! Request and response types for the authentication endpoints

use serde::{Deserialize, Serialize};

use crate::auth::users::UserProfile;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub profession: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register and login: a bearer token plus the user record
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
