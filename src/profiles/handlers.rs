//! Profile HTTP handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::{self, ProfileUpdate, UserProfile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Query parameters for the user directory
#[derive(Debug, Deserialize)]
pub struct DirectoryParams {
    pub profession: Option<String>,
    pub search: Option<String>,
}

/// Apply a partial update to the caller's profile and return the fresh
/// record. Absent fields are left untouched.
pub async fn update_profile(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = users::update_profile(&pool, user_id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Json(user.into()))
}

/// Look up a single user by id
pub async fn get_user(
    State(pool): State<PgPool>,
    AuthUser(_caller): AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = users::get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    Ok(Json(user.into()))
}

/// Directory search: everyone except the caller, optionally filtered by
/// profession and by a case-insensitive name substring. Capped at 100.
pub async fn list_users(
    State(pool): State<PgPool>,
    AuthUser(caller_id): AuthUser,
    Query(params): Query<DirectoryParams>,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let results = users::search_users(
        &pool,
        caller_id,
        params.profession.as_deref(),
        params.search.as_deref(),
    )
    .await?;

    Ok(Json(results.into_iter().map(Into::into).collect()))
}
