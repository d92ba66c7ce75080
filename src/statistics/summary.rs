//! Aggregated statistics over a set of shift records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Aggregates over a filtered set of shift records.
///
/// A summary is always derived from the shifts it summarizes and is never
/// persisted independently of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of shifts in the set.
    pub total_shifts: u64,
    /// Sum of worked hours (including meal additions).
    pub total_hours: Decimal,
    /// Sum of paid overtime hours.
    pub total_overtime: Decimal,
    /// Sum of net earnings.
    pub total_net: i64,
    /// Sum of gross earnings.
    pub total_gross: i64,
}

/// Summarizes a set of shift records with plain sums and counts.
///
/// An empty set yields a zeroed summary; aggregation never fails.
///
/// # Example
///
/// ```
/// use shift_pay_engine::statistics::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.total_shifts, 0);
/// assert_eq!(summary.total_net, 0);
/// ```
pub fn summarize(shifts: &[ShiftRecord]) -> StatisticsSummary {
    StatisticsSummary {
        total_shifts: shifts.len() as u64,
        total_hours: shifts.iter().map(|s| s.total_hours).sum(),
        total_overtime: shifts.iter().map(|s| s.overtime_hours).sum(),
        total_net: shifts.iter().map(|s| s.total_net).sum(),
        total_gross: shifts.iter().map(|s| s.total_gross).sum(),
    }
}
