//! Messaging HTTP handlers
//!
//! - `POST /api/messages` - send a message (persist, then best-effort push)
//! - `GET /api/messages/{other_id}` - fetch a conversation, marking the
//!   viewer's side read
//! - `GET /api/messages/unread/count` - unread total across conversations

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::{db, Message};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::realtime::{ChannelRegistry, PushEvent};

/// Request body for sending a message
#[derive(Debug, Deserialize)]
pub struct MessageCreate {
    pub receiver_id: Uuid,
    pub content: String,
}

/// Response for the unread counter
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// Send a direct message.
///
/// The message is persisted first; only then is a push attempted on the
/// receiver's live channel. A missing or dead channel never fails the
/// send, durability was already achieved and the receiver will see the
/// message on their next conversation read.
pub async fn send_message(
    State(pool): State<PgPool>,
    State(registry): State<ChannelRegistry>,
    AuthUser(sender_id): AuthUser,
    Json(request): Json<MessageCreate>,
) -> Result<Json<Message>, ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("content", "must not be empty"));
    }

    get_user_by_id(&pool, request.receiver_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let message = db::insert_message(&pool, sender_id, request.receiver_id, &request.content).await?;

    let delivered = registry.push(
        request.receiver_id,
        PushEvent::NewMessage {
            message: message.clone(),
        },
    );
    if !delivered {
        tracing::debug!(
            receiver_id = %request.receiver_id,
            "receiver has no live channel, message awaits pull"
        );
    }

    Ok(Json(message))
}

/// Fetch the conversation with another user, oldest first.
///
/// As a side effect, every unread message addressed to the caller in this
/// conversation is marked read. The returned records reflect the state
/// before the flip, matching what the caller had not yet seen.
pub async fn fetch_conversation(
    State(pool): State<PgPool>,
    AuthUser(viewer_id): AuthUser,
    Path(other_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = db::get_conversation(&pool, viewer_id, other_id).await?;
    db::mark_conversation_read(&pool, viewer_id, other_id).await?;

    Ok(Json(messages))
}

/// Unread message count for the caller
pub async fn unread_count(
    State(pool): State<PgPool>,
    AuthUser(viewer_id): AuthUser,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let unread_count = db::unread_count(&pool, viewer_id).await?;

    Ok(Json(UnreadCountResponse { unread_count }))
}
