use axum::{extract::State, Extension, Json};
use chrono::Utc;
use pulse_analytics::{build_summary, AnalyticsSummary};
use pulse_core::Post;

use crate::middleware::{AuthedUser, RequestId};

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// `GET /api/v1/analytics/summary`
///
/// Fetches every post belonging to the authenticated user most-recent-first
/// (the ordering the top-performer tie-break depends on) and reduces them to
/// the dashboard summary. Nothing is cached or stored; the summary is
/// recomputed from source rows on every request.
pub(super) async fn get_analytics_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(AuthedUser(user_id)): Extension<AuthedUser>,
) -> Result<Json<ApiResponse<AnalyticsSummary>>, ApiError> {
    let rows = pulse_db::list_posts(&state.pool, user_id, None, None)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let posts: Vec<Post> = rows.into_iter().map(Post::from).collect();
    let summary = build_summary(&posts, Utc::now());

    Ok(Json(ApiResponse {
        data: summary,
        meta: ResponseMeta::new(req_id.0),
    }))
}
