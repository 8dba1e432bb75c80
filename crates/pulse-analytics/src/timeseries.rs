//! Time-series gap-filling and normalization.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use pulse_core::DailyMetric;

use crate::types::TimeSeriesPoint;

/// Produce one point per calendar day from `start` to `end` inclusive,
/// ascending, filling days without a record with zeros.
///
/// Lookup is by exact calendar day. `start > end` yields an empty series.
/// Storage keeps `(user, date)` unique, so duplicates are not expected; if
/// one slips through, the last record seen for a date wins rather than the
/// values being summed.
#[must_use]
pub fn normalize_daily(
    records: &[DailyMetric],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    if start > end {
        return Vec::new();
    }

    let by_date: HashMap<NaiveDate, &DailyMetric> =
        records.iter().map(|m| (m.date, m)).collect();

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| {
            by_date.get(&day).map_or(
                TimeSeriesPoint {
                    date: day,
                    engagement: 0,
                    reach: 0,
                },
                |metric| TimeSeriesPoint {
                    date: day,
                    engagement: metric.engagement,
                    reach: metric.reach,
                },
            )
        })
        .collect()
}

/// The `days`-long query range ending today: `[today - (days - 1), today]`.
///
/// `days` has already been validated at the request boundary (1–365), so a
/// one-day range starts and ends today.
#[must_use]
pub fn trailing_range(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days - 1), today)
}
