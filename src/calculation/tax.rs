//! Net to gross tax conversion.
//!
//! This module provides the net→gross conversion used for base pay,
//! overtime earnings, and service fees. The authoritative figure computed
//! and stored by the engine is always net; the gross figure is
//! informational, for display by the caller.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::validate_tax_percentage;
use crate::error::{EngineError, EngineResult};

/// Converts a net amount to gross: `round(net / (1 - tax/100))`.
///
/// Integer currency rounding is round-half-up. A tax percentage of 100 is
/// rejected as invalid configuration (division by zero).
///
/// # Example
///
/// ```
/// use shift_pay_engine::calculation::to_gross;
/// use rust_decimal::Decimal;
///
/// // 10 000 net at 13% tax -> 11 494 gross
/// assert_eq!(to_gross(10_000, Decimal::new(13, 0)).unwrap(), 11_494);
/// // 0% tax is the identity
/// assert_eq!(to_gross(500, Decimal::ZERO).unwrap(), 500);
/// ```
pub fn to_gross(net: i64, tax_percentage: Decimal) -> EngineResult<i64> {
    validate_tax_percentage("tax_percentage", tax_percentage)?;

    let retained = Decimal::ONE - tax_percentage / Decimal::ONE_HUNDRED;
    round_currency(Decimal::from(net) / retained)
}

/// Rounds a decimal amount to integer currency, half-up.
pub(crate) fn round_currency(amount: Decimal) -> EngineResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("currency amount {} does not fit integer currency", amount),
        })
}
