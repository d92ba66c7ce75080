//! CSV export of shift records.
//!
//! The column set and order are a compatibility surface for downstream
//! consumers and must not change:
//! `date,start_time,end_time,total_hours,overtime_hours,total_net`.

use std::fmt::Write;

use crate::models::ShiftRecord;

/// The fixed CSV header row.
pub const CSV_HEADER: &str = "date,start_time,end_time,total_hours,overtime_hours,total_net";

/// Formats shift records as CSV text.
///
/// Dates are `YYYY-MM-DD`, times `HH:MM`, numeric fields plain decimal text
/// with no thousands separators, so the export round-trips losslessly.
///
/// # Example
///
/// ```
/// use shift_pay_engine::statistics::to_csv;
///
/// let csv = to_csv(&[]);
/// assert_eq!(csv, "date,start_time,end_time,total_hours,overtime_hours,total_net\n");
/// ```
pub fn to_csv(shifts: &[ShiftRecord]) -> String {
    let mut out = String::with_capacity((shifts.len() + 1) * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for shift in shifts {
        // All fields are dates, times, or numbers: no quoting is needed.
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            shift.date.format("%Y-%m-%d"),
            shift.start_time.format("%H:%M"),
            shift.end_time.format("%H:%M"),
            shift.total_hours,
            shift.overtime_hours,
            shift.total_net,
        );
    }

    out
}
