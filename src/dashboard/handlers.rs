//! Dashboard HTTP handler
//!
//! `GET /api/dashboard/stats` derives summary counters for the caller
//! from the user, post and message stores. Pure read, no caching; every
//! call computes fresh values.

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::feed::db as feed_db;
use crate::middleware::auth::AuthUser;

/// Aggregate statistics for one user
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_posts: i64,
    pub total_connections: usize,
    pub pending_requests: usize,
    pub total_likes: i64,
    pub total_comments: i64,
    pub profession: String,
    /// Number of users (including the caller) sharing the caller's
    /// profession
    pub profession_count: i64,
}

/// Compute the caller's dashboard counters
pub async fn get_dashboard_stats(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DashboardStats>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let total_posts = feed_db::count_posts(&pool, user.id).await?;
    let (total_likes, total_comments) = feed_db::engagement_totals(&pool, user.id).await?;

    let (profession_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE profession = $1")
            .bind(&user.profession)
            .fetch_one(&pool)
            .await?;

    Ok(Json(DashboardStats {
        total_posts,
        total_connections: user.connections.len(),
        pending_requests: user.pending_requests.len(),
        total_likes,
        total_comments,
        profession: user.profession,
        profession_count,
    }))
}
