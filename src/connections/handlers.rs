//! Connection-graph HTTP handlers
//!
//! - `POST /api/connections/request` - send a connection request
//! - `POST /api/connections/accept/{requester_id}` - accept a request
//! - `POST /api/connections/reject/{requester_id}` - reject a request
//! - `GET /api/connections/pending` - users who requested the caller
//! - `GET /api/connections` - the caller's connections

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::db;
use crate::auth::users::{get_user_by_id, get_users_by_ids, UserProfile};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Request body for sending a connection request
#[derive(Debug, Deserialize)]
pub struct ConnectionRequest {
    pub target_user_id: Uuid,
}

/// Generic acknowledgement body
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: &'static str,
}

/// Send a connection request.
///
/// Fails with `NotFound` if the target does not exist and with
/// `AlreadyConnected` if the caller is already in the target's connection
/// set. Repeating a request is a no-op, not a duplicate.
pub async fn request_connection(
    State(pool): State<PgPool>,
    AuthUser(requester_id): AuthUser,
    Json(request): Json<ConnectionRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    if request.target_user_id == requester_id {
        return Err(ApiError::validation(
            "target_user_id",
            "cannot request a connection to yourself",
        ));
    }

    let target = get_user_by_id(&pool, request.target_user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    if target.connections.contains(&requester_id) {
        return Err(ApiError::AlreadyConnected);
    }

    if !db::add_pending_request(&pool, target.id, requester_id).await? {
        return Err(ApiError::not_found("user"));
    }

    tracing::info!(%requester_id, target_id = %target.id, "connection request sent");

    Ok(Json(AckResponse {
        message: "Connection request sent",
    }))
}

/// Accept a connection request. Both users end up in each other's
/// connection set; the pending entry disappears.
pub async fn accept_connection(
    State(pool): State<PgPool>,
    AuthUser(accepter_id): AuthUser,
    Path(requester_id): Path<Uuid>,
) -> Result<Json<AckResponse>, ApiError> {
    if !db::accept_connection(&pool, accepter_id, requester_id).await? {
        return Err(ApiError::not_found("user"));
    }

    tracing::info!(%accepter_id, %requester_id, "connection accepted");

    Ok(Json(AckResponse {
        message: "Connection accepted",
    }))
}

/// Reject a connection request. Only the caller's pending set changes.
pub async fn reject_connection(
    State(pool): State<PgPool>,
    AuthUser(rejecter_id): AuthUser,
    Path(requester_id): Path<Uuid>,
) -> Result<Json<AckResponse>, ApiError> {
    if !db::remove_pending_request(&pool, rejecter_id, requester_id).await? {
        return Err(ApiError::not_found("user"));
    }

    tracing::info!(%rejecter_id, %requester_id, "connection rejected");

    Ok(Json(AckResponse {
        message: "Connection rejected",
    }))
}

/// List the full records of everyone who has requested the caller
pub async fn list_pending(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let users = get_users_by_ids(&pool, &user.pending_requests).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// List the full records of the caller's connections
pub async fn list_connections(
    State(pool): State<PgPool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))?;

    let users = get_users_by_ids(&pool, &user.connections).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}
