/**
 * Registration Handler
 *
 * Handles `POST /api/auth/register`.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password
 * 2. Reject if email or username is already taken
 * 3. Hash password using bcrypt
 * 4. Create user row
 * 5. Return a JWT token and the new user record
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, alphanumeric + underscore
 * - Email must contain '@'
 * - Password must be at least 8 characters
 */

use axum::{extract::State, Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, email_or_username_taken};
use crate::error::ApiError;

/// Validate username format
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Register handler
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if !is_valid_username(&request.username) {
        return Err(ApiError::validation(
            "username",
            "must be 3-30 characters, start with a letter, and contain only \
             letters, digits and underscores",
        ));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("email", "invalid email address"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }

    if email_or_username_taken(&pool, &request.email, &request.username).await? {
        return Err(ApiError::AlreadyExists);
    }

    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ApiError::unauthorized(format!("password hashing failed: {e}")))?;

    let user = create_user(
        &pool,
        &request.username,
        &request.email,
        &password_hash,
        &request.full_name,
        &request.profession,
        &request.bio,
        &request.location,
    )
    .await
    .map_err(|e| match &e {
        // Unique-index race between the existence check and the insert.
        sqlx::Error::Database(db) if db.is_unique_violation() => ApiError::AlreadyExists,
        _ => ApiError::Database(e),
    })?;

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| ApiError::unauthorized(format!("token creation failed: {e}")))?;

    tracing::info!(user_id = %user.id, username = %user.username, "user registered");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
