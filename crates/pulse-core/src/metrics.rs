//! The per-day aggregate metric record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate engagement and reach for one user on one calendar day.
///
/// Storage guarantees at most one record per `(user, date)`; days with no
/// activity simply have no record, and the time-series normalizer fills
/// those gaps with zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub engagement: i64,
    pub reach: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_serializes_as_iso_calendar_day() {
        let metric = DailyMetric {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date"),
            engagement: 42,
            reach: 900,
        };
        let json = serde_json::to_string(&metric).expect("serialize");
        assert!(json.contains("\"date\":\"2024-01-05\""));
    }
}
