use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use pulse_analytics::engagement_score;
use pulse_db::PostRow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::{AuthedUser, RequestId};

use super::{map_db_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct PostsQuery {
    pub platform: Option<String>,
    pub limit: Option<i64>,
}

/// A post as the dashboard table renders it: raw counts plus the computed
/// engagement score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PostItem {
    pub id: Uuid,
    pub platform: String,
    pub caption: Option<String>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub engagement: i64,
    pub posted_at: DateTime<Utc>,
}

impl From<PostRow> for PostItem {
    fn from(row: PostRow) -> Self {
        let post = pulse_core::Post::from(row);
        let engagement = engagement_score(&post);
        Self {
            id: post.id,
            platform: post.platform,
            caption: post.caption,
            likes: post.likes,
            comments: post.comments,
            shares: post.shares,
            engagement_rate: post.engagement_rate,
            engagement,
            posted_at: post.posted_at,
        }
    }
}

/// `GET /api/v1/posts?platform=&limit=`
///
/// Lists the authenticated user's posts most recent first, optionally
/// narrowed to one platform. `limit` is defaulted and clamped rather than
/// rejected.
pub(super) async fn list_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(AuthedUser(user_id)): Extension<AuthedUser>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<ApiResponse<Vec<PostItem>>>, ApiError> {
    let rows = pulse_db::list_posts(
        &state.pool,
        user_id,
        query.platform.as_deref(),
        Some(normalize_limit(query.limit)),
    )
    .await
    .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows.into_iter().map(PostItem::from).collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/posts/{post_id}`
pub(super) async fn get_post_detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(AuthedUser(user_id)): Extension<AuthedUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PostItem>>, ApiError> {
    let row = pulse_db::get_post(&state.pool, user_id, post_id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let Some(row) = row else {
        return Err(ApiError::new(req_id.0, "not_found", "post not found"));
    };

    Ok(Json(ApiResponse {
        data: PostItem::from(row),
        meta: ResponseMeta::new(req_id.0),
    }))
}
