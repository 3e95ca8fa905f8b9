//! Database operations for direct messages

use sqlx::PgPool;
use uuid::Uuid;

use super::{Message, CONVERSATION_CAP};

const MESSAGE_COLUMNS: &str = "id, sender_id, receiver_id, content, read, created_at";

/// Persist a new message (unread)
pub async fn insert_message(
    pool: &PgPool,
    sender_id: Uuid,
    receiver_id: Uuid,
    content: &str,
) -> Result<Message, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query_as::<_, Message>(&format!(
        r#"
        INSERT INTO messages (id, sender_id, receiver_id, content, read, created_at)
        VALUES ($1, $2, $3, $4, FALSE, $5)
        RETURNING {MESSAGE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(sender_id)
    .bind(receiver_id)
    .bind(content)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// All messages between two users, oldest first, capped at
/// `CONVERSATION_CAP`
pub async fn get_conversation(
    pool: &PgPool,
    viewer_id: Uuid,
    other_id: Uuid,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(&format!(
        r#"
        SELECT {MESSAGE_COLUMNS}
        FROM messages
        WHERE (sender_id = $1 AND receiver_id = $2)
           OR (sender_id = $2 AND receiver_id = $1)
        ORDER BY created_at ASC
        LIMIT {CONVERSATION_CAP}
        "#
    ))
    .bind(viewer_id)
    .bind(other_id)
    .fetch_all(pool)
    .await
}

/// Mark every unread message from `other_id` to `viewer_id` as read.
/// Messages the viewer sent are untouched.
pub async fn mark_conversation_read(
    pool: &PgPool,
    viewer_id: Uuid,
    other_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET read = TRUE
        WHERE sender_id = $2 AND receiver_id = $1 AND NOT read
        "#,
    )
    .bind(viewer_id)
    .bind(other_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Count of unread messages addressed to `viewer_id`, across all
/// conversations
pub async fn unread_count(pool: &PgPool, viewer_id: Uuid) -> Result<i64, sqlx::Error> {
    let row: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM messages WHERE receiver_id = $1 AND NOT read")
            .bind(viewer_id)
            .fetch_one(pool)
            .await?;

    Ok(row.0)
}
