//! The per-post engagement record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single social-media post with its raw interaction counts.
///
/// Interaction counts are `Option` because platforms do not report every
/// metric for every post; an absent count means "unknown", not zero. The
/// distinction matters for `engagement_rate`, which is excluded from
/// averages when absent rather than dragging them down as a zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Source platform tag, e.g. `"instagram"` or `"tiktok"`.
    pub platform: String,
    pub caption: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    /// Platform-reported engagement rate on a percentage scale.
    pub engagement_rate: Option<f64>,
    pub posted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_round_trips_through_json_with_nulls() {
        let post = Post {
            id: Uuid::nil(),
            platform: "instagram".to_string(),
            caption: None,
            likes: Some(10),
            comments: None,
            shares: Some(3),
            engagement_rate: None,
            posted_at: Utc::now(),
        };
        let json = serde_json::to_string(&post).expect("serialize");
        assert!(json.contains("\"caption\":null"));
        let back: Post = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.likes, Some(10));
        assert_eq!(back.comments, None);
    }
}
