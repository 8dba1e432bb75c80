//! Analytics aggregation engine for Pulse.
//!
//! Turns one user's already-fetched post and daily-metric records into the
//! summary and time-series values the dashboard consumes: per-post
//! engagement scores, totals and averages, the top-performing post,
//! period-over-period trend, and a dense gap-filled daily series.
//!
//! Every function here is pure and total: no I/O, no clock reads (callers
//! inject `now`), and every defined input maps to a defined output — the
//! empty-collection and zero-window cases are terminal results, not errors.

pub mod scorer;
pub mod summary;
pub mod timeseries;
pub mod top;
pub mod trend;
pub mod types;

pub use scorer::engagement_score;
pub use summary::build_summary;
pub use timeseries::{normalize_daily, trailing_range};
pub use top::top_performing_post;
pub use trend::{engagement_trend, window_totals, TREND_WINDOW_DAYS};
pub use types::{AnalyticsSummary, TimeSeriesPoint, TopPost, TrendDirection, TrendResult};
