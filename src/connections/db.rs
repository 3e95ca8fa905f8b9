//! Database operations for the connection graph
//!
//! The `connections` and `pending_requests` sets live on the user row as
//! uuid arrays. Insertion is a conditional `array_append` (a no-op when
//! the id is already present) and removal is `array_remove`, mirroring
//! document-store set-union/set-removal semantics with per-row atomicity.

use sqlx::PgPool;
use uuid::Uuid;

/// Add `requester_id` to the target's pending set (idempotent union).
///
/// Returns false if the target row does not exist.
pub async fn add_pending_request(
    pool: &PgPool,
    target_id: Uuid,
    requester_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET pending_requests = CASE
                WHEN $2 = ANY(pending_requests) THEN pending_requests
                ELSE array_append(pending_requests, $2)
            END
        WHERE id = $1
        "#,
    )
    .bind(target_id)
    .bind(requester_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Accept a pending request: both sides of the symmetric relationship are
/// updated inside one transaction, so a failure on either side leaves the
/// graph untouched.
///
/// The accepter's pending entry for the requester is removed and each user
/// is added to the other's connection set. The requester's pending entry
/// for the accepter (a reverse request that happened to be outstanding) is
/// removed as well, so no id can end up in both sets of one user.
///
/// Returns false if either user row does not exist.
pub async fn accept_connection(
    pool: &PgPool,
    accepter_id: Uuid,
    requester_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let accepter_side = sqlx::query(
        r#"
        UPDATE users
        SET pending_requests = array_remove(pending_requests, $2),
            connections = CASE
                WHEN $2 = ANY(connections) THEN connections
                ELSE array_append(connections, $2)
            END
        WHERE id = $1
        "#,
    )
    .bind(accepter_id)
    .bind(requester_id)
    .execute(&mut *tx)
    .await?;

    let requester_side = sqlx::query(
        r#"
        UPDATE users
        SET pending_requests = array_remove(pending_requests, $2),
            connections = CASE
                WHEN $2 = ANY(connections) THEN connections
                ELSE array_append(connections, $2)
            END
        WHERE id = $1
        "#,
    )
    .bind(requester_id)
    .bind(accepter_id)
    .execute(&mut *tx)
    .await?;

    if accepter_side.rows_affected() == 0 || requester_side.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    tx.commit().await?;
    Ok(true)
}

/// Remove `requester_id` from the rejecter's pending set. The requester's
/// own state is untouched.
///
/// Returns false if the rejecter row does not exist.
pub async fn remove_pending_request(
    pool: &PgPool,
    rejecter_id: Uuid,
    requester_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET pending_requests = array_remove(pending_requests, $2)
        WHERE id = $1
        "#,
    )
    .bind(rejecter_id)
    .bind(requester_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
