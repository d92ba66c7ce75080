//! Period filtering of shift records.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// The time window a statistics view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodFilter {
    /// Every shift, unfiltered.
    All,
    /// Shifts from the last 7 days, cutoff inclusive.
    Week,
    /// Shifts from the last 30 days, cutoff inclusive.
    Month,
}

/// Filters shift records to the requested period.
///
/// `today` is the midnight boundary of the current day; the cutoff is
/// inclusive, so a shift dated exactly 7 days before `today` IS included
/// under [`PeriodFilter::Week`].
///
/// # Example
///
/// ```
/// use shift_pay_engine::statistics::{filter_by_period, PeriodFilter};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// let filtered = filter_by_period(&[], PeriodFilter::Week, today);
/// assert!(filtered.is_empty());
/// ```
pub fn filter_by_period(
    shifts: &[ShiftRecord],
    filter: PeriodFilter,
    today: NaiveDate,
) -> Vec<ShiftRecord> {
    let cutoff = match filter {
        PeriodFilter::All => return shifts.to_vec(),
        PeriodFilter::Week => today - Duration::days(7),
        PeriodFilter::Month => today - Duration::days(30),
    };

    shifts
        .iter()
        .filter(|shift| shift.date >= cutoff)
        .cloned()
        .collect()
}

/// Filters shift records against the current local date.
pub fn filter_by_period_now(shifts: &[ShiftRecord], filter: PeriodFilter) -> Vec<ShiftRecord> {
    filter_by_period(shifts, filter, Local::now().date_naive())
}
