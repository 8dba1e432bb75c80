//! Terminal rendering of a user's analytics.

use chrono::Utc;
use pulse_analytics::{build_summary, normalize_daily, trailing_range, TrendDirection};
use pulse_core::{DailyMetric, Post};
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch a user's records, run the engine, and print the result.
///
/// # Errors
///
/// Returns an error if any database query fails.
pub async fn print_report(pool: &PgPool, user_id: Uuid, days: i64) -> anyhow::Result<()> {
    let rows = pulse_db::list_posts(pool, user_id, None, None).await?;
    let posts: Vec<Post> = rows.into_iter().map(Post::from).collect();
    let summary = build_summary(&posts, Utc::now());

    println!("analytics for user {user_id} ({} posts)", posts.len());
    println!("  total engagement: {}", summary.total_engagement);
    println!(
        "  average engagement rate: {:.2}%",
        summary.average_engagement_rate
    );
    match &summary.top_performing_post {
        Some(top) => {
            let caption = top.caption.as_deref().unwrap_or("(no caption)");
            println!(
                "  top post: {} on {} ({} interactions) — {caption}",
                top.id, top.platform, top.engagement
            );
        }
        None => println!("  top post: none"),
    }
    let arrow = match summary.trend.direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
        TrendDirection::Neutral => "=",
    };
    println!(
        "  30-day trend: {arrow} {:.1}% vs previous period",
        summary.trend.percentage
    );

    let (start, end) = trailing_range(Utc::now().date_naive(), days);
    let rows = pulse_db::list_daily_metrics_in_range(pool, user_id, start, end).await?;
    let records: Vec<DailyMetric> = rows.into_iter().map(DailyMetric::from).collect();
    let series = normalize_daily(&records, start, end);

    println!("daily metrics, last {days} days:");
    for point in &series {
        println!(
            "  {}  engagement {:>6}  reach {:>8}",
            point.date, point.engagement, point.reach
        );
    }

    Ok(())
}
