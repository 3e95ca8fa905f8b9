/**
 * API Error Types
 *
 * One taxonomy for every operation:
 *
 * - `NotFound` - referenced user/post/message absent, or the caller is not
 *   authorized for a destructive action. Absence and foreign ownership are
 *   deliberately collapsed for posts so the error surface does not reveal
 *   whether a post exists.
 * - `AlreadyExists` - duplicate registration (email or username taken).
 * - `AlreadyConnected` - connection request to an existing connection.
 * - `Unauthorized` - missing/invalid/expired bearer token, bad login.
 * - `Validation` - malformed request input.
 * - `Database` - store failure, surfaced as 500.
 *
 * All errors are terminal for the single operation; the core performs no
 * retries. Push-delivery failures in the realtime layer are recovered
 * locally and never become an `ApiError`.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced entity absent, or caller unauthorized for a destructive
    /// action on it
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind for the error message ("user", "post", ...)
        entity: &'static str,
    },

    /// Duplicate registration
    #[error("user with this email or username already exists")]
    AlreadyExists,

    /// Connection request to a user who is already a connection
    #[error("already connected")]
    AlreadyConnected,

    /// Missing, invalid or expired credential
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Human-readable reason (never echoes the credential)
        message: String,
    },

    /// Request input failed validation
    #[error("validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Shorthand for a not-found error
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Shorthand for an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Shorthand for a validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::AlreadyConnected => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
