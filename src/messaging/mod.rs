//! Direct messaging
//!
//! Messages are persisted first and pushed to the receiver's live channel
//! best effort. A conversation read marks everything addressed to the
//! viewer as read (read receipts on view); messages are otherwise
//! immutable and never deleted.

pub mod db;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use handlers::{fetch_conversation, send_message, unread_count};

/// Maximum messages returned by a single conversation read
pub const CONVERSATION_CAP: i64 = 500;

/// A direct message between two users
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    /// False at creation; flips to true exactly once, when the receiver
    /// reads the conversation containing it
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
