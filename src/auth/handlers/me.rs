//! Current-user handler for `GET /api/auth/me`

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::auth::users::{get_user_by_id, UserProfile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Return the authenticated caller's own record
pub async fn get_me(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Json(user.into()))
}
