//! Output value types produced by the engine.
//!
//! Serde shapes match the dashboard's wire contract: the summary payload is
//! camelCase, trend directions are lowercase strings, and time-series dates
//! are ISO `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether engagement moved up, down, or stayed flat period over period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Period-over-period engagement change.
///
/// `percentage` is always the non-negative magnitude of the change;
/// `direction` alone carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub percentage: f64,
    pub direction: TrendDirection,
}

/// Projection of the winning post returned inside the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPost {
    pub id: Uuid,
    pub caption: Option<String>,
    /// Computed score, not a stored column.
    pub engagement: i64,
    pub platform: String,
    pub posted_at: DateTime<Utc>,
}

/// The full analytics summary consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_engagement: i64,
    pub average_engagement_rate: f64,
    pub top_performing_post: Option<TopPost>,
    pub trend: TrendResult,
}

/// One day of the dense, gap-filled time series.
///
/// Days with no stored metric carry zeros rather than being omitted, so the
/// series is regularly spaced for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub engagement: i64,
    pub reach: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Up).expect("serialize"),
            "\"up\""
        );
        assert_eq!(
            serde_json::to_string(&TrendDirection::Neutral).expect("serialize"),
            "\"neutral\""
        );
    }

    #[test]
    fn summary_serializes_camel_case_with_null_top_post() {
        let summary = AnalyticsSummary {
            total_engagement: 0,
            average_engagement_rate: 0.0,
            top_performing_post: None,
            trend: TrendResult {
                percentage: 0.0,
                direction: TrendDirection::Neutral,
            },
        };
        let json = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(json["totalEngagement"], 0);
        assert_eq!(json["averageEngagementRate"], 0.0);
        assert!(json["topPerformingPost"].is_null());
        assert_eq!(json["trend"]["direction"], "neutral");
    }

    #[test]
    fn top_post_serializes_camel_case() {
        let top = TopPost {
            id: Uuid::nil(),
            caption: Some("hello".to_string()),
            engagement: 12,
            platform: "tiktok".to_string(),
            posted_at: Utc::now(),
        };
        let json = serde_json::to_value(&top).expect("serialize");
        assert_eq!(json["engagement"], 12);
        assert!(json["postedAt"].is_string());
    }

    #[test]
    fn time_series_point_date_is_iso_day() {
        let point = TimeSeriesPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
            engagement: 5,
            reach: 100,
        };
        let json = serde_json::to_value(point).expect("serialize");
        assert_eq!(json["date"], "2024-03-09");
    }
}
