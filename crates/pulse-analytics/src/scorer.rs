//! Per-post engagement scoring.

use pulse_core::Post;

/// Total interaction count for a post: likes + comments + shares.
///
/// Counts the platform did not report are treated as zero. The result is
/// never negative because stored counts are non-negative.
#[must_use]
pub fn engagement_score(post: &Post) -> i64 {
    post.likes.unwrap_or(0) + post.comments.unwrap_or(0) + post.shares.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn post(likes: Option<i64>, comments: Option<i64>, shares: Option<i64>) -> Post {
        Post {
            id: Uuid::new_v4(),
            platform: "instagram".to_string(),
            caption: None,
            likes,
            comments,
            shares,
            engagement_rate: None,
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn sums_all_three_counts() {
        assert_eq!(engagement_score(&post(Some(10), Some(5), Some(2))), 17);
    }

    #[test]
    fn missing_counts_are_zero() {
        assert_eq!(engagement_score(&post(None, None, None)), 0);
        assert_eq!(engagement_score(&post(Some(7), None, None)), 7);
        assert_eq!(engagement_score(&post(None, Some(3), Some(1))), 4);
    }

    #[test]
    fn all_zero_counts_score_zero() {
        assert_eq!(engagement_score(&post(Some(0), Some(0), Some(0))), 0);
    }
}
