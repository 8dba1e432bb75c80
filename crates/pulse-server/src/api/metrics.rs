use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use pulse_analytics::{normalize_daily, trailing_range, TimeSeriesPoint};
use pulse_core::DailyMetric;
use serde::Deserialize;

use crate::middleware::{AuthedUser, RequestId};

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

const MIN_DAYS: i64 = 1;
const MAX_DAYS: i64 = 365;
const DEFAULT_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub(super) struct DailyMetricsQuery {
    pub days: Option<i64>,
}

/// `GET /api/v1/metrics/daily?days=N`
///
/// Returns one point per calendar day for the trailing `days`-day range
/// ending today (UTC), zero-filled for days without a stored metric. The
/// range bound lives here at the boundary; the engine only ever sees
/// resolved dates.
pub(super) async fn list_daily_metrics(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(AuthedUser(user_id)): Extension<AuthedUser>,
    Query(query): Query<DailyMetricsQuery>,
) -> Result<Json<ApiResponse<Vec<TimeSeriesPoint>>>, ApiError> {
    let days = query.days.unwrap_or(DEFAULT_DAYS);
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!("days must be between {MIN_DAYS} and {MAX_DAYS}"),
        ));
    }

    let (start, end) = trailing_range(Utc::now().date_naive(), days);

    let rows = pulse_db::list_daily_metrics_in_range(&state.pool, user_id, start, end)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let records: Vec<DailyMetric> = rows.into_iter().map(DailyMetric::from).collect();
    let data = normalize_daily(&records, start, end);

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
