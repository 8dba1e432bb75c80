//! Period-over-period trend computation.

use chrono::{DateTime, Duration, Utc};
use pulse_core::Post;

use crate::scorer::engagement_score;
use crate::types::{TrendDirection, TrendResult};

/// Length of each comparison window in days.
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Compare engagement totals across two adjacent windows.
///
/// With a non-zero previous total the percentage is the magnitude of the
/// relative change and the direction carries the sign. Growth from a zero
/// previous total cannot be expressed as a ratio and is reported as 100% up
/// by policy; two zero windows are flat.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_trend(current: i64, previous: i64) -> TrendResult {
    if previous > 0 {
        let change = (current - previous) as f64 / previous as f64 * 100.0;
        let direction = if current > previous {
            TrendDirection::Up
        } else if current < previous {
            TrendDirection::Down
        } else {
            TrendDirection::Neutral
        };
        return TrendResult {
            percentage: change.abs(),
            direction,
        };
    }

    if current > 0 {
        return TrendResult {
            percentage: 100.0,
            direction: TrendDirection::Up,
        };
    }

    TrendResult {
        percentage: 0.0,
        direction: TrendDirection::Neutral,
    }
}

/// Sum engagement scores for the current and previous 30-day windows.
///
/// Windows are adjacent and half-open on the earlier edge so no post is
/// double-counted: current is `[now - 30d, now]`, previous is
/// `[now - 60d, now - 30d)`. Posts outside both windows (including posts
/// dated after `now`) contribute to neither.
#[must_use]
pub fn window_totals(posts: &[Post], now: DateTime<Utc>) -> (i64, i64) {
    let current_start = now - Duration::days(TREND_WINDOW_DAYS);
    let previous_start = current_start - Duration::days(TREND_WINDOW_DAYS);

    let mut current = 0;
    let mut previous = 0;

    for post in posts {
        if post.posted_at >= current_start && post.posted_at <= now {
            current += engagement_score(post);
        } else if post.posted_at >= previous_start && post.posted_at < current_start {
            previous += engagement_score(post);
        }
    }

    (current, previous)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn growth_is_up_with_relative_percentage() {
        let trend = engagement_trend(150, 100);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decline_is_down_with_positive_percentage() {
        let trend = engagement_trend(50, 100);
        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equal_windows_are_neutral() {
        let trend = engagement_trend(100, 100);
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert!(trend.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn both_zero_is_flat() {
        let trend = engagement_trend(0, 0);
        assert_eq!(trend.direction, TrendDirection::Neutral);
        assert!(trend.percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn growth_from_nothing_is_one_hundred_percent_up() {
        let trend = engagement_trend(20, 0);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_loss_is_one_hundred_percent_down() {
        let trend = engagement_trend(0, 80);
        assert_eq!(trend.direction, TrendDirection::Down);
        assert!((trend.percentage - 100.0).abs() < f64::EPSILON);
    }

    fn post_at(posted_at: DateTime<Utc>, likes: i64) -> Post {
        Post {
            id: Uuid::new_v4(),
            platform: "instagram".to_string(),
            caption: None,
            likes: Some(likes),
            comments: None,
            shares: None,
            engagement_rate: None,
            posted_at,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn posts_partition_into_adjacent_windows() {
        let now = fixed_now();
        let posts = vec![
            post_at(now - Duration::days(5), 10),   // current
            post_at(now - Duration::days(29), 7),   // current
            post_at(now - Duration::days(31), 20),  // previous
            post_at(now - Duration::days(59), 5),   // previous
            post_at(now - Duration::days(100), 99), // outside both
        ];
        assert_eq!(window_totals(&posts, now), (17, 25));
    }

    #[test]
    fn window_boundaries_are_inclusive_current_exclusive_previous() {
        let now = fixed_now();
        let exactly_thirty = post_at(now - Duration::days(30), 3);
        let exactly_sixty = post_at(now - Duration::days(60), 4);
        let posts = vec![exactly_thirty, exactly_sixty];
        // A post exactly 30 days old opens the current window; exactly 60
        // days old opens the previous window. Neither is double-counted.
        assert_eq!(window_totals(&posts, now), (3, 4));
    }

    #[test]
    fn future_posts_count_toward_neither_window() {
        let now = fixed_now();
        let posts = vec![post_at(now + Duration::days(1), 50)];
        assert_eq!(window_totals(&posts, now), (0, 0));
    }
}
