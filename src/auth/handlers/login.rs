/**
 * Login Handler
 *
 * Handles `POST /api/auth/login`. Verifies email + password and returns a
 * fresh JWT token. Unknown email and wrong password produce the same
 * `Unauthorized` error so the response does not reveal which accounts
 * exist.
 */

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;

/// Login handler
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid email or password"))?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::unauthorized(format!("password verification failed: {e}")))?;

    if !valid {
        return Err(ApiError::unauthorized("invalid email or password"));
    }

    let token = create_token(user.id, user.email.clone())
        .map_err(|e| ApiError::unauthorized(format!("token creation failed: {e}")))?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
