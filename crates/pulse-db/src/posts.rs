//! Database operations for the `posts` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
///
/// Interaction counts are nullable in storage: NULL means the platform did
/// not report the metric, which downstream averaging must not conflate with
/// zero.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub platform: String,
    pub caption: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<PostRow> for pulse_core::Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            platform: row.platform,
            caption: row.caption,
            likes: row.likes,
            comments: row.comments,
            shares: row.shares,
            engagement_rate: row.engagement_rate,
            posted_at: row.posted_at,
        }
    }
}

/// Fields for inserting a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub platform: String,
    pub caption: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub posted_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// List one user's posts, most recent first.
///
/// Ordering is `posted_at DESC, id DESC` — the analytics top-performer
/// tie-break prefers the first post it sees, so this query is what makes
/// "first" mean "most recent". `id` breaks equal timestamps
/// deterministically. An optional platform tag narrows the listing; a
/// `None` limit binds as SQL NULL, which Postgres reads as no limit.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_posts(
    pool: &PgPool,
    user_id: Uuid,
    platform: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<PostRow>, DbError> {
    let rows = match platform {
        Some(platform) => {
            sqlx::query_as::<_, PostRow>(
                "SELECT id, user_id, platform, caption, likes, comments, shares, \
                        engagement_rate, posted_at, created_at \
                 FROM posts \
                 WHERE user_id = $1 AND platform = $2 \
                 ORDER BY posted_at DESC, id DESC \
                 LIMIT $3",
            )
            .bind(user_id)
            .bind(platform)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, PostRow>(
                "SELECT id, user_id, platform, caption, likes, comments, shares, \
                        engagement_rate, posted_at, created_at \
                 FROM posts \
                 WHERE user_id = $1 \
                 ORDER BY posted_at DESC, id DESC \
                 LIMIT $2",
            )
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows)
}

/// Fetch a single post owned by `user_id`, or `None` if it does not exist.
///
/// The owner check is part of the query so one user can never read another
/// user's post by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_post(
    pool: &PgPool,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<Option<PostRow>, DbError> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, user_id, platform, caption, likes, comments, shares, \
                engagement_rate, posted_at, created_at \
         FROM posts \
         WHERE user_id = $1 AND id = $2",
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a post and return its generated id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_post(pool: &PgPool, post: &NewPost) -> Result<Uuid, DbError> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO posts \
             (user_id, platform, caption, likes, comments, shares, engagement_rate, posted_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
         RETURNING id",
    )
    .bind(post.user_id)
    .bind(&post.platform)
    .bind(&post.caption)
    .bind(post.likes)
    .bind(post.comments)
    .bind(post.shares)
    .bind(post.engagement_rate)
    .bind(post.posted_at)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
