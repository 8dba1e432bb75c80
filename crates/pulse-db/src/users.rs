//! Database operations for the `users` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upsert a user by id, updating the email and display name on conflict.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_user(
    pool: &PgPool,
    id: Uuid,
    email: &str,
    display_name: Option<&str>,
) -> Result<Uuid, DbError> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (id, email, display_name) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (id) DO UPDATE SET \
             email = EXCLUDED.email, \
             display_name = EXCLUDED.display_name \
         RETURNING id",
    )
    .bind(id)
    .bind(email)
    .bind(display_name)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Fetch a user by id, or `None` if it does not exist.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_user(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, display_name, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
