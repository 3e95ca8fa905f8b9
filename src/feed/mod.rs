//! Feed: posts, likes and comments
//!
//! A viewer's feed scope is their connection set plus themselves; the feed
//! returns the newest posts from that scope, capped. Likes are an
//! idempotent set on the post row; comments are an append-only sequence.

pub mod db;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use handlers::{add_comment, create_post, delete_post, get_feed, toggle_like};

/// Maximum number of posts a single feed read returns. There is no cursor
/// beyond this cap; this is a known scaling boundary.
pub const FEED_CAP: i64 = 100;

/// A post in the feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    /// Owning user
    pub author_id: Uuid,
    /// Denormalized for read efficiency
    pub author_username: String,
    pub content: String,
    /// Users who currently like this post (set semantics)
    pub likes: Vec<Uuid>,
    /// Append-only comment sequence, stored as a jsonb array
    pub comments: sqlx::types::Json<Vec<Comment>>,
    pub created_at: DateTime<Utc>,
}

/// A single comment on a post. Comments are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
