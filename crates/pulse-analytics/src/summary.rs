//! Composition of the full analytics summary.

use chrono::{DateTime, Utc};
use pulse_core::Post;

use crate::scorer::engagement_score;
use crate::top::top_performing_post;
use crate::trend::{engagement_trend, window_totals};
use crate::types::{AnalyticsSummary, TrendDirection, TrendResult};

/// Build the summary for one user's posts.
///
/// `posts` must be most-recent-first (see [`top_performing_post`]); `now`
/// anchors the 30-day trend windows and is injected so tests can pin it.
/// An empty collection is a defined terminal case: all-zero totals, no top
/// post, neutral trend.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_summary(posts: &[Post], now: DateTime<Utc>) -> AnalyticsSummary {
    if posts.is_empty() {
        return AnalyticsSummary {
            total_engagement: 0,
            average_engagement_rate: 0.0,
            top_performing_post: None,
            trend: TrendResult {
                percentage: 0.0,
                direction: TrendDirection::Neutral,
            },
        };
    }

    let total_engagement = posts.iter().map(engagement_score).sum();

    // Posts without a reported rate are excluded from the denominator, not
    // averaged in as zeros.
    let rates: Vec<f64> = posts.iter().filter_map(|p| p.engagement_rate).collect();
    let average_engagement_rate = if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    };

    let (current, previous) = window_totals(posts, now);

    AnalyticsSummary {
        total_engagement,
        average_engagement_rate,
        top_performing_post: top_performing_post(posts),
        trend: engagement_trend(current, previous),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn post(posted_at: DateTime<Utc>, likes: i64, rate: Option<f64>) -> Post {
        Post {
            id: Uuid::new_v4(),
            platform: "instagram".to_string(),
            caption: None,
            likes: Some(likes),
            comments: None,
            shares: None,
            engagement_rate: rate,
            posted_at,
        }
    }

    #[test]
    fn empty_posts_yield_the_zero_summary() {
        let summary = build_summary(&[], fixed_now());
        assert_eq!(summary.total_engagement, 0);
        assert!(summary.average_engagement_rate.abs() < f64::EPSILON);
        assert!(summary.top_performing_post.is_none());
        assert_eq!(summary.trend.direction, TrendDirection::Neutral);
        assert!(summary.trend.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn total_engagement_sums_every_post() {
        let now = fixed_now();
        let posts = vec![
            post(now - Duration::days(1), 10, None),
            post(now - Duration::days(45), 20, None),
            post(now - Duration::days(200), 30, None),
        ];
        let summary = build_summary(&posts, now);
        assert_eq!(summary.total_engagement, 60);
    }

    #[test]
    fn average_rate_excludes_posts_without_a_rate() {
        let now = fixed_now();
        let posts = vec![
            post(now - Duration::days(1), 1, None),
            post(now - Duration::days(2), 1, Some(10.0)),
            post(now - Duration::days(3), 1, Some(20.0)),
        ];
        let summary = build_summary(&posts, now);
        // Mean of {10, 20}, not {0, 10, 20}.
        assert!((summary.average_engagement_rate - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_rate_is_zero_when_no_post_carries_one() {
        let now = fixed_now();
        let posts = vec![post(now - Duration::days(1), 5, None)];
        let summary = build_summary(&posts, now);
        assert!(summary.average_engagement_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn top_post_and_trend_use_the_same_scores() {
        let now = fixed_now();
        let posts = vec![
            post(now - Duration::days(2), 40, None),  // current window
            post(now - Duration::days(40), 80, None), // previous window
        ];
        let summary = build_summary(&posts, now);

        let top = summary.top_performing_post.expect("has a top post");
        assert_eq!(top.engagement, 80);

        // 40 now vs 80 before: halved.
        assert_eq!(summary.trend.direction, TrendDirection::Down);
        assert!((summary.trend.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn first_window_of_activity_reads_as_full_growth() {
        let now = fixed_now();
        let posts = vec![post(now - Duration::days(3), 25, None)];
        let summary = build_summary(&posts, now);
        assert_eq!(summary.trend.direction, TrendDirection::Up);
        assert!((summary.trend.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn old_posts_only_yield_neutral_trend_but_real_totals() {
        let now = fixed_now();
        let posts = vec![post(now - Duration::days(300), 50, Some(4.0))];
        let summary = build_summary(&posts, now);
        assert_eq!(summary.total_engagement, 50);
        assert_eq!(summary.trend.direction, TrendDirection::Neutral);
        assert!(summary.trend.percentage.abs() < f64::EPSILON);
        assert!(summary.top_performing_post.is_some());
    }
}
