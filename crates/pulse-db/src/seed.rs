//! Demo-data seeding for local development.

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// The fixed user the development environment assumes when auth is disabled.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(1);

const PLATFORMS: &[&str] = &["instagram", "tiktok", "twitter", "youtube"];

const CAPTIONS: &[&str] = &[
    "Behind the scenes of today's shoot",
    "New drop is live — link in bio",
    "Q&A time: ask me anything",
    "Throwback to last summer",
    "Unboxing the latest gear",
];

/// Counts of what a seeding run wrote.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub posts: usize,
    pub metric_days: usize,
}

/// Seed a demo user with randomized posts and gappy daily metrics.
///
/// Posts are spread over the trailing 75 days so both trend windows get
/// data; roughly one day in four is skipped for metrics so the gap-filling
/// path is visible in the dashboard. Everything runs in one transaction;
/// a failure rolls the whole batch back. Re-running upserts the user and
/// metrics and appends fresh posts.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails.
pub async fn seed_demo_data(
    pool: &PgPool,
    user_id: Uuid,
    metric_days: i64,
    post_count: usize,
) -> Result<SeedSummary, DbError> {
    let mut rng = rand::rng();
    let mut tx = pool.begin().await?;
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, email, display_name) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (id) DO UPDATE SET display_name = EXCLUDED.display_name",
    )
    .bind(user_id)
    .bind(format!("demo+{user_id}@pulse.local"))
    .bind("Demo Creator")
    .execute(&mut *tx)
    .await?;

    for _ in 0..post_count {
        let age_days = rng.random_range(0..75);
        let posted_at = now - Duration::days(age_days) - Duration::minutes(rng.random_range(0..1440));
        let platform = PLATFORMS[rng.random_range(0..PLATFORMS.len())];
        let caption = CAPTIONS[rng.random_range(0..CAPTIONS.len())];

        // Occasionally leave counts unreported to exercise null handling.
        let likes: Option<i64> = (rng.random_range(0..10) > 0).then(|| rng.random_range(0..5_000));
        let comments: Option<i64> = (rng.random_range(0..10) > 1).then(|| rng.random_range(0..400));
        let shares: Option<i64> = (rng.random_range(0..10) > 2).then(|| rng.random_range(0..900));
        let engagement_rate: Option<f64> =
            (rng.random_range(0..10) > 2).then(|| f64::from(rng.random_range(5..120)) / 10.0);

        sqlx::query(
            "INSERT INTO posts \
                 (user_id, platform, caption, likes, comments, shares, engagement_rate, posted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(user_id)
        .bind(platform)
        .bind(caption)
        .bind(likes)
        .bind(comments)
        .bind(shares)
        .bind(engagement_rate)
        .bind(posted_at)
        .execute(&mut *tx)
        .await?;
    }

    let today = now.date_naive();
    let mut seeded_days = 0usize;
    for offset in 0..metric_days {
        // Skip ~1 in 4 days so the normalizer has gaps to fill.
        if rng.random_range(0..4) == 0 {
            continue;
        }
        let date = today - Duration::days(offset);
        sqlx::query(
            "INSERT INTO daily_metrics (user_id, date, engagement, reach) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, date) DO UPDATE SET \
                 engagement = EXCLUDED.engagement, \
                 reach = EXCLUDED.reach",
        )
        .bind(user_id)
        .bind(date)
        .bind(rng.random_range(0..2_000_i64))
        .bind(rng.random_range(500..50_000_i64))
        .execute(&mut *tx)
        .await?;
        seeded_days += 1;
    }

    tx.commit().await?;

    Ok(SeedSummary {
        posts: post_count,
        metric_days: seeded_days,
    })
}
