//! Progressive overtime resolution.
//!
//! This module converts a shift's total worked hours into paid overtime
//! hours and a per-tier earnings breakdown:
//!
//! 1. `raw_overtime = max(0, total_hours - base_shift_hours)`;
//! 2. the grace rule zeroes overtime at or below the threshold;
//! 3. the remainder is snapped to the nearest multiple of the rounding
//!    increment, half-up;
//! 4. the snapped figure is walked tier by tier in `order_num` order, each
//!    tier paid at its own net rate.
//!
//! The per-tier allocated hours always sum exactly to the paid overtime
//! hours: the tier set tiles `[0, ∞)` by construction.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{ProfessionConfig, RateTierSet};
use crate::error::EngineResult;
use crate::models::TierEarnings;

use super::tax::{round_currency, to_gross};

/// The result of overtime resolution for one shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeResult {
    /// Paid overtime hours after the grace and rounding rules.
    pub overtime_hours: Decimal,
    /// Total net overtime earnings.
    pub earnings_net: i64,
    /// Per-tier earnings, in tier order; tiers with no allocated hours are
    /// omitted.
    pub breakdown: Vec<TierEarnings>,
}

impl OvertimeResult {
    fn zero() -> Self {
        Self {
            overtime_hours: Decimal::ZERO,
            earnings_net: 0,
            breakdown: Vec::new(),
        }
    }
}

/// Resolves paid overtime for a shift.
///
/// # Arguments
///
/// * `total_hours` - Worked hours including meal additions
/// * `profession` - Pay rules supplying the base shift duration, grace
///   threshold, rounding increment, and tax rate
/// * `tiers` - The validated progressive rate tiers
///
/// # Grace rule
///
/// If the raw overtime is at or below `overtime_threshold_hours`, no
/// overtime is paid at all. Above the threshold the *full* raw figure is
/// snapped to the nearest multiple of `overtime_rounding_increment`,
/// rounding halves up (e.g. increment 0.5 snaps 1.24 to 1.0 and 1.26 to
/// 1.5).
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::resolve_overtime;
/// use shift_pay_engine::config::{ProfessionConfig, RateTier, RateTierSet};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let profession = ProfessionConfig {
///     position: "gaffer".to_string(),
///     base_rate_net: 10_000,
///     tax_percentage: Decimal::from_str("13").unwrap(),
///     base_shift_hours: Decimal::from_str("12").unwrap(),
///     break_hours: Decimal::ZERO,
///     overtime_threshold_hours: Decimal::from_str("0.25").unwrap(),
///     overtime_rounding_increment: Decimal::from_str("0.5").unwrap(),
///     daily_allowance: 0,
///     conditions: String::new(),
/// };
/// let tiers = RateTierSet::new(vec![
///     RateTier { order_num: 1, hours_from: Decimal::ZERO, hours_to: Some(Decimal::TWO), rate_net_per_hour: 500 },
///     RateTier { order_num: 2, hours_from: Decimal::TWO, hours_to: None, rate_net_per_hour: 600 },
/// ]).unwrap();
///
/// // 14.6 worked hours: raw overtime 2.6 snaps to 2.5
/// let result = resolve_overtime(Decimal::from_str("14.6").unwrap(), &profession, &tiers).unwrap();
/// assert_eq!(result.overtime_hours, Decimal::from_str("2.5").unwrap());
/// assert_eq!(result.earnings_net, 2 * 500 + 300); // 2h @ 500 + 0.5h @ 600
/// ```
pub fn resolve_overtime(
    total_hours: Decimal,
    profession: &ProfessionConfig,
    tiers: &RateTierSet,
) -> EngineResult<OvertimeResult> {
    let raw_overtime = total_hours - profession.base_shift_hours;
    if raw_overtime <= profession.overtime_threshold_hours {
        return Ok(OvertimeResult::zero());
    }

    let overtime_hours = snap_to_increment(raw_overtime, profession.overtime_rounding_increment);
    if overtime_hours <= Decimal::ZERO {
        return Ok(OvertimeResult::zero());
    }

    let mut earnings_net = 0i64;
    let mut breakdown = Vec::new();

    for tier in tiers.tiers() {
        let upper = match tier.hours_to {
            Some(hours_to) => overtime_hours.min(hours_to),
            None => overtime_hours,
        };
        let hours_in_tier = (upper - tier.hours_from).max(Decimal::ZERO);
        if hours_in_tier <= Decimal::ZERO {
            continue;
        }

        let tier_net = round_currency(hours_in_tier * Decimal::from(tier.rate_net_per_hour))?;
        let tier_gross = to_gross(tier_net, profession.tax_percentage)?;
        earnings_net += tier_net;

        breakdown.push(TierEarnings {
            hours_from: tier.hours_from,
            hours_to: tier.hours_to,
            hours: hours_in_tier,
            rate_net_per_hour: tier.rate_net_per_hour,
            earnings_net: tier_net,
            earnings_gross: tier_gross,
        });
    }

    Ok(OvertimeResult {
        overtime_hours,
        earnings_net,
        breakdown,
    })
}

/// Snaps `hours` to the nearest multiple of `increment`, rounding halves
/// toward the larger increment.
fn snap_to_increment(hours: Decimal, increment: Decimal) -> Decimal {
    let increments = (hours / increment)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (increments * increment).normalize()
}
