//! Database operations for the `daily_metrics` table.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `daily_metrics` table.
///
/// `(user_id, date)` is unique — one aggregate per user per calendar day.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyMetricRow {
    pub id: i64,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub engagement: i64,
    pub reach: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DailyMetricRow> for pulse_core::DailyMetric {
    fn from(row: DailyMetricRow) -> Self {
        Self {
            date: row.date,
            engagement: row.engagement,
            reach: row.reach,
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// List one user's daily metrics with `date` in `[start, end]`, ascending.
///
/// Days without a record are simply absent; the time-series normalizer
/// fills them downstream.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_daily_metrics_in_range(
    pool: &PgPool,
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyMetricRow>, DbError> {
    let rows = sqlx::query_as::<_, DailyMetricRow>(
        "SELECT id, user_id, date, engagement, reach, created_at \
         FROM daily_metrics \
         WHERE user_id = $1 AND date >= $2 AND date <= $3 \
         ORDER BY date ASC",
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Upsert the aggregate for one user-day, returning the row id.
///
/// Conflicts on `(user_id, date)` replace the stored values — the metric is
/// a day-level snapshot, not an accumulator.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_daily_metric(
    pool: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
    engagement: i64,
    reach: i64,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO daily_metrics (user_id, date, engagement, reach) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (user_id, date) DO UPDATE SET \
             engagement = EXCLUDED.engagement, \
             reach = EXCLUDED.reach \
         RETURNING id",
    )
    .bind(user_id)
    .bind(date)
    .bind(engagement)
    .bind(reach)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
