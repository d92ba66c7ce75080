//! Computed shift record models.
//!
//! This module contains [`ShiftRecord`], the immutable result of computing
//! one shift, together with the detail line types that make up its pay
//! breakdown.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings contributed by one overtime tier.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::TierEarnings;
/// use rust_decimal::Decimal;
///
/// let line = TierEarnings {
///     hours_from: Decimal::ZERO,
///     hours_to: Some(Decimal::TWO),
///     hours: Decimal::TWO,
///     rate_net_per_hour: 500,
///     earnings_net: 1000,
///     earnings_gross: 1149,
/// };
/// assert_eq!(line.earnings_net, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierEarnings {
    /// Lower bound of the tier's hour range.
    pub hours_from: Decimal,
    /// Upper bound of the tier's hour range; `None` = unbounded.
    pub hours_to: Option<Decimal>,
    /// Overtime hours allocated to this tier.
    pub hours: Decimal,
    /// The tier's net rate per hour.
    pub rate_net_per_hour: i64,
    /// Net earnings for this tier.
    pub earnings_net: i64,
    /// Gross earnings for this tier at the profession's tax rate.
    pub earnings_gross: i64,
}

/// A service fee applied to a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedServiceFee {
    /// The service's name.
    pub name: String,
    /// Net cost of the service.
    pub cost_net: i64,
    /// Gross cost at the service's own tax rate.
    pub cost_gross: i64,
    /// The service's tax percentage.
    pub tax_percentage: Decimal,
}

/// Detailed composition of a shift's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Net base pay (full base rate, or pro-rated for a short shift).
    pub base_pay_net: i64,
    /// Gross base pay at the profession's tax rate.
    pub base_pay_gross: i64,
    /// Hours added by matched meal types.
    pub meal_hours_added: Decimal,
    /// Per-tier overtime earnings, in tier order.
    pub overtime: Vec<TierEarnings>,
    /// Untaxed daily allowance.
    pub daily_allowance: i64,
    /// Service fees applied to this shift.
    pub services: Vec<AppliedServiceFee>,
}

/// The immutable result of computing one shift.
///
/// A `ShiftRecord` is computed once per reported shift and never
/// recomputed; configuration changes apply only to shifts computed after
/// the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The date the shift started.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift.
    pub end_time: NaiveTime,
    /// Worked hours including meal additions.
    pub total_hours: Decimal,
    /// Paid overtime hours after the grace and rounding rules.
    pub overtime_hours: Decimal,
    /// Net sum of applied service fees.
    pub service_fees_net: i64,
    /// Gross sum of applied service fees (each at its own tax rate).
    pub service_fees_gross: i64,
    /// Total net earnings for the shift.
    pub total_net: i64,
    /// Total gross earnings for the shift.
    pub total_gross: i64,
    /// Detailed pay composition.
    pub breakdown: PayBreakdown,
}
