//! Shift statistics: aggregation, period filtering, and CSV export.
//!
//! All functions operate on already-computed [`crate::models::ShiftRecord`]
//! sets and never fail on empty input.

mod export;
mod period;
mod summary;

pub use export::{CSV_HEADER, to_csv};
pub use period::{PeriodFilter, filter_by_period, filter_by_period_now};
pub use summary::{StatisticsSummary, summarize};
