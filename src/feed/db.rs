//! Database operations for posts

use sqlx::PgPool;
use uuid::Uuid;

use super::{Comment, Post, FEED_CAP};

const POST_COLUMNS: &str = "id, author_id, author_username, content, likes, comments, created_at";

/// Insert a new post
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    author_username: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = chrono::Utc::now();

    sqlx::query_as::<_, Post>(&format!(
        r#"
        INSERT INTO posts (id, author_id, author_username, content, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {POST_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(author_id)
    .bind(author_username)
    .bind(content)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// All posts whose author is in `scope`, newest first, capped at `FEED_CAP`
pub async fn get_posts_in_scope(pool: &PgPool, scope: &[Uuid]) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts
        WHERE author_id = ANY($1)
        ORDER BY created_at DESC
        LIMIT {FEED_CAP}
        "#
    ))
    .bind(scope)
    .fetch_all(pool)
    .await
}

/// Atomically toggle `actor_id` in the post's like set.
///
/// Returns `Some(true)` if the post is now liked by the actor,
/// `Some(false)` if the toggle removed the like, and `None` if the post
/// does not exist. One statement, so two concurrent toggles from the same
/// actor flip the state twice rather than racing.
pub async fn toggle_like(
    pool: &PgPool,
    post_id: Uuid,
    actor_id: Uuid,
) -> Result<Option<bool>, sqlx::Error> {
    let row: Option<(bool,)> = sqlx::query_as(
        r#"
        UPDATE posts
        SET likes = CASE
                WHEN $2 = ANY(likes) THEN array_remove(likes, $2)
                ELSE array_append(likes, $2)
            END
        WHERE id = $1
        RETURNING $2 = ANY(likes)
        "#,
    )
    .bind(post_id)
    .bind(actor_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(liked,)| liked))
}

/// Append a comment to a post's comment sequence.
///
/// Returns false if the post does not exist.
pub async fn append_comment(
    pool: &PgPool,
    post_id: Uuid,
    comment: &Comment,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET comments = comments || $2::jsonb
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .bind(sqlx::types::Json(comment))
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a post, but only when `author_id` owns it.
///
/// Returns false both when the post is absent and when it belongs to
/// someone else; callers report the two cases identically.
pub async fn delete_post(pool: &PgPool, post_id: Uuid, author_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND author_id = $2")
        .bind(post_id)
        .bind(author_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Like and comment totals across one author's posts, for the dashboard
pub async fn engagement_totals(pool: &PgPool, author_id: Uuid) -> Result<(i64, i64), sqlx::Error> {
    let row: (i64, i64) = sqlx::query_as(
        r#"
        SELECT COALESCE(SUM(cardinality(likes)), 0)::bigint,
               COALESCE(SUM(jsonb_array_length(comments)), 0)::bigint
        FROM posts
        WHERE author_id = $1
        "#,
    )
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Number of posts owned by one author
pub async fn count_posts(pool: &PgPool, author_id: Uuid) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE author_id = $1")
        .bind(author_id)
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
