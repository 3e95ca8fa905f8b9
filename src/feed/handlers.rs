//! Feed HTTP handlers
//!
//! - `POST /api/posts` - create a post
//! - `GET /api/posts` - the caller's feed (connections + self)
//! - `DELETE /api/posts/{id}` - delete an owned post
//! - `POST /api/posts/{id}/like` - toggle a like
//! - `POST /api/posts/{id}/comment` - append a comment

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::{db, Comment, Post};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Request body for creating a post
#[derive(Debug, Deserialize)]
pub struct PostCreate {
    pub content: String,
}

/// Request body for commenting on a post
#[derive(Debug, Deserialize)]
pub struct CommentCreate {
    pub content: String,
}

/// Response for a like toggle
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub message: &'static str,
    pub liked: bool,
}

/// Response for a new comment
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub message: &'static str,
    pub comment: Comment,
}

/// Create a post owned by the caller
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<PostCreate>,
) -> Result<Json<Post>, ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("content", "must not be empty"));
    }

    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let post = db::create_post(&pool, user.id, &user.username, &request.content).await?;

    tracing::info!(post_id = %post.id, author_id = %user.id, "post created");

    Ok(Json(post))
}

/// The caller's feed: posts from their connections and themselves,
/// newest first, capped at `FEED_CAP`
pub async fn get_feed(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Post>>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let mut scope = user.connections;
    scope.push(user.id);

    let posts = db::get_posts_in_scope(&pool, &scope).await?;
    Ok(Json(posts))
}

/// Toggle the caller's like on a post
pub async fn toggle_like(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<LikeResponse>, ApiError> {
    let liked = db::toggle_like(&pool, post_id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post"))?;

    Ok(Json(LikeResponse {
        message: if liked { "Post liked" } else { "Post unliked" },
        liked,
    }))
}

/// Append a comment to a post
pub async fn add_comment(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<CommentCreate>,
) -> Result<Json<CommentResponse>, ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("content", "must not be empty"));
    }

    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let comment = Comment {
        id: Uuid::new_v4(),
        author_id: user.id,
        author_username: user.username,
        content: request.content,
        created_at: chrono::Utc::now(),
    };

    if !db::append_comment(&pool, post_id, &comment).await? {
        return Err(ApiError::not_found("post"));
    }

    Ok(Json(CommentResponse {
        message: "Comment added",
        comment,
    }))
}

/// Delete a post the caller owns.
///
/// A post owned by someone else reports the same `NotFound` as a post
/// that does not exist, so the error surface does not reveal existence.
pub async fn delete_post(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<AckMessage>, ApiError> {
    if !db::delete_post(&pool, post_id, user_id).await? {
        return Err(ApiError::not_found("post"));
    }

    tracing::info!(%post_id, author_id = %user_id, "post deleted");

    Ok(Json(AckMessage {
        message: "Post deleted",
    }))
}

/// Generic acknowledgement body
#[derive(Debug, Serialize)]
pub struct AckMessage {
    pub message: &'static str,
}
