/**
 * User Model and Database Operations
 *
 * This module handles user records and the store operations on them. The
 * connection-graph state (`connections`, `pending_requests`) lives on the
 * user row as uuid arrays; graph mutations themselves are in the
 * `connections` module.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user row in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub full_name: String,
    /// Profession, used for directory filtering and dashboard stats
    pub profession: String,
    /// Free-form bio
    pub bio: String,
    /// Free-form location
    pub location: String,
    /// Avatar reference (optional)
    pub avatar_url: Option<String>,
    /// Accepted connections (symmetric: A lists B iff B lists A)
    pub connections: Vec<Uuid>,
    /// Incoming connection requests not yet accepted or rejected
    pub pending_requests: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Public view of a user: everything except the credential.
///
/// This is the only user shape that handlers serialize back to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub profession: String,
    pub bio: String,
    pub location: String,
    pub avatar_url: Option<String>,
    pub connections: Vec<Uuid>,
    pub pending_requests: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            profession: user.profession,
            bio: user.bio,
            location: user.location,
            avatar_url: user.avatar_url,
            connections: user.connections,
            pending_requests: user.pending_requests,
            created_at: user.created_at,
        }
    }
}

/// Fields a user may change on their own profile. `None` leaves the field
/// untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

const USER_COLUMNS: &str = "id, username, email, password_hash, full_name, profession, bio, \
                            location, avatar_url, connections, pending_requests, created_at";

/// Create a new user
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
    full_name: &str,
    profession: &str,
    bio: &str,
    location: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, username, email, password_hash, full_name, profession, bio, location, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(profession)
    .bind(bio)
    .bind(location)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Check whether a user exists with the given email or username
pub async fn email_or_username_taken(
    pool: &PgPool,
    email: &str,
    username: &str,
) -> Result<bool, sqlx::Error> {
    let row: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM users WHERE email = $1 OR username = $2 LIMIT 1")
            .bind(email)
            .bind(username)
            .fetch_optional(pool)
            .await?;

    Ok(row.is_some())
}

/// Fetch the users for a set of ids (used for pending/connection listings).
/// Missing ids are silently skipped; an empty id set returns an empty list.
pub async fn get_users_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<User>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1) LIMIT 100"
    ))
    .bind(ids)
    .fetch_all(pool)
    .await
}

/// Apply a partial profile update and return the fresh record
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET full_name  = COALESCE($2, full_name),
            bio        = COALESCE($3, bio),
            location   = COALESCE($4, location),
            avatar_url = COALESCE($5, avatar_url)
        WHERE id = $1
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(update.full_name.as_deref())
    .bind(update.bio.as_deref())
    .bind(update.location.as_deref())
    .bind(update.avatar_url.as_deref())
    .fetch_optional(pool)
    .await
}

/// Directory search: all users except the caller, optionally filtered by
/// profession and by a case-insensitive username/full-name substring.
/// Capped at 100 results.
pub async fn search_users(
    pool: &PgPool,
    caller_id: Uuid,
    profession: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE id <> $1
          AND ($2::text IS NULL OR profession = $2)
          AND ($3::text IS NULL
               OR username ILIKE '%' || $3 || '%'
               OR full_name ILIKE '%' || $3 || '%')
        ORDER BY created_at DESC
        LIMIT 100
        "#
    ))
    .bind(caller_id)
    .bind(profession)
    .bind(search)
    .fetch_all(pool)
    .await
}
