//! Top-performer selection.

use pulse_core::Post;

use crate::scorer::engagement_score;
use crate::types::TopPost;

/// Return the highest-scoring post, or `None` for an empty collection.
///
/// Ties go to the first post encountered (strict `>` against the running
/// maximum). Callers must pass posts most-recent-first so that, among posts
/// with equal engagement, the most recently posted one wins; the post
/// listing query orders `posted_at DESC` to uphold this.
#[must_use]
pub fn top_performing_post(posts: &[Post]) -> Option<TopPost> {
    let mut best: Option<(&Post, i64)> = None;

    for post in posts {
        let score = engagement_score(post);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((post, score)),
        }
    }

    best.map(|(post, score)| TopPost {
        id: post.id,
        caption: post.caption.clone(),
        engagement: score,
        platform: post.platform.clone(),
        posted_at: post.posted_at,
    })
}
