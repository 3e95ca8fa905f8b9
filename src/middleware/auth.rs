/**
 * Authentication Extractor
 *
 * This module provides the bearer-token identity check every protected
 * route relies on. It extracts the JWT from the Authorization header,
 * verifies it, and hands the caller's user id to the handler.
 *
 * Handlers receive an already-validated identity; no handler ever sees
 * the credential itself.
 */

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;

/// Axum extractor for the authenticated caller's user id.
///
/// Usage: `async fn handler(AuthUser(user_id): AuthUser, ...)`.
/// Rejects with `Unauthorized` if the header is missing, malformed, or the
/// token fails verification.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Uuid);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                ApiError::unauthorized("missing Authorization header")
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::unauthorized("expected 'Bearer <token>'")
        })?;

        identity_from_token(token)
    }
}

/// Validate a raw JWT and return the identity it carries.
///
/// Shared between the header extractor and the WebSocket endpoint, which
/// receives its token as a query parameter.
pub fn identity_from_token(token: &str) -> Result<AuthUser, ApiError> {
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("invalid or expired token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::unauthorized("invalid user id in token"))?;

    Ok(AuthUser(user_id))
}
