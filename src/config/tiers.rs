//! Progressive overtime rate tiers.
//!
//! This module defines the [`RateTier`] and [`RateTierSet`] types. A rate
//! tier set is an ordered list of hour ranges, each paid at its own net
//! hourly rate, that together tile `[0, ∞)` with no gap and no overlap.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single progressive overtime tier.
///
/// Overtime hours falling in `[hours_from, hours_to)` are paid at
/// `rate_net_per_hour`. A tier with `hours_to = None` is unbounded above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Position of this tier in the evaluation sequence (1-based).
    pub order_num: u32,
    /// Lower bound of the tier's hour range (inclusive).
    pub hours_from: Decimal,
    /// Upper bound of the tier's hour range (exclusive); `None` = unbounded.
    pub hours_to: Option<Decimal>,
    /// Net rate per overtime hour in this tier, in the smallest currency
    /// denomination.
    pub rate_net_per_hour: i64,
}

/// A validated, ordered set of progressive overtime tiers.
///
/// Construction fails closed: an invalid set can never be obtained, so every
/// `RateTierSet` handed to the calculation layer is known to tile `[0, ∞)`.
///
/// # Example
///
/// ```
/// use shift_pay_engine::config::{RateTier, RateTierSet};
/// use rust_decimal::Decimal;
///
/// let tiers = RateTierSet::new(vec![
///     RateTier {
///         order_num: 1,
///         hours_from: Decimal::ZERO,
///         hours_to: Some(Decimal::TWO),
///         rate_net_per_hour: 500,
///     },
///     RateTier {
///         order_num: 2,
///         hours_from: Decimal::TWO,
///         hours_to: None,
///         rate_net_per_hour: 600,
///     },
/// ]).unwrap();
/// assert_eq!(tiers.tiers().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateTier>", into = "Vec<RateTier>")]
pub struct RateTierSet {
    tiers: Vec<RateTier>,
}

impl RateTierSet {
    /// Validates and constructs a tier set.
    ///
    /// # Validation rules
    ///
    /// - at least one tier;
    /// - `order_num` values form a contiguous `1..=N` sequence;
    /// - sorted by `order_num`, the tiers start at `hours_from = 0` and each
    ///   tier's `hours_to` equals the next tier's `hours_from`;
    /// - exactly one tier is unbounded (`hours_to = None`) and it is last;
    /// - every bounded tier has `hours_to > hours_from`;
    /// - every `rate_net_per_hour` is positive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if any rule is violated.
    pub fn new(tiers: Vec<RateTier>) -> EngineResult<Self> {
        if tiers.is_empty() {
            return Err(invalid("tiers", "at least one rate tier is required"));
        }

        let mut sorted = tiers;
        sorted.sort_by_key(|t| t.order_num);

        for (i, tier) in sorted.iter().enumerate() {
            let expected = (i + 1) as u32;
            if tier.order_num != expected {
                return Err(invalid(
                    "order_num",
                    format!(
                        "tier order numbers must form a contiguous 1..{} sequence, found {}",
                        sorted.len(),
                        tier.order_num
                    ),
                ));
            }
            if tier.rate_net_per_hour <= 0 {
                return Err(invalid(
                    "rate_net_per_hour",
                    format!("tier {} rate must be positive", tier.order_num),
                ));
            }
        }

        if sorted[0].hours_from != Decimal::ZERO {
            return Err(invalid(
                "hours_from",
                "the first tier must start at 0 hours",
            ));
        }

        let last_index = sorted.len() - 1;
        for (i, tier) in sorted.iter().enumerate() {
            match tier.hours_to {
                None => {
                    if i != last_index {
                        return Err(invalid(
                            "hours_to",
                            format!(
                                "tier {} is unbounded but is not the last tier",
                                tier.order_num
                            ),
                        ));
                    }
                }
                Some(hours_to) => {
                    if i == last_index {
                        return Err(invalid(
                            "hours_to",
                            "the last tier must be unbounded (hours_to = null)",
                        ));
                    }
                    if hours_to <= tier.hours_from {
                        return Err(invalid(
                            "hours_to",
                            format!(
                                "tier {} upper bound {} must exceed lower bound {}",
                                tier.order_num, hours_to, tier.hours_from
                            ),
                        ));
                    }
                    if hours_to != sorted[i + 1].hours_from {
                        return Err(invalid(
                            "hours_from",
                            format!(
                                "tier {} ends at {} but tier {} starts at {}",
                                tier.order_num,
                                hours_to,
                                sorted[i + 1].order_num,
                                sorted[i + 1].hours_from
                            ),
                        ));
                    }
                }
            }
        }

        Ok(Self { tiers: sorted })
    }

    /// Returns the tiers in `order_num` order.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}

impl TryFrom<Vec<RateTier>> for RateTierSet {
    type Error = EngineError;

    fn try_from(tiers: Vec<RateTier>) -> EngineResult<Self> {
        Self::new(tiers)
    }
}

impl From<RateTierSet> for Vec<RateTier> {
    fn from(set: RateTierSet) -> Self {
        set.tiers
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfiguration {
        field: field.to_string(),
        message: message.into(),
    }
}
