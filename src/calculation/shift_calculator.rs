//! Shift pay orchestration.
//!
//! This module composes meal adjustment, overtime resolution, tax
//! conversion, and service fee resolution into one immutable
//! [`ShiftRecord`].

use rust_decimal::Decimal;

use crate::config::ProjectConfig;
use crate::error::EngineResult;
use crate::models::{PayBreakdown, ShiftInput, ShiftRecord};

use super::meal_adjustment::apply_meal_additions;
use super::overtime::resolve_overtime;
use super::service_fees::resolve_service_fees;
use super::tax::{round_currency, to_gross};

/// Computes the pay record for one reported shift.
///
/// # Sequence
///
/// 1. Meal additions fold into worked hours, so meal time is paid at the
///    overtime tier rate.
/// 2. Overtime is resolved against the adjusted hours.
/// 3. Base pay is the full `base_rate_net` for a full shift, pro-rated by
///    `adjusted_hours / base_shift_hours` for a shorter one.
/// 4. `total_net = base + overtime + daily_allowance + service_fees`.
/// 5. `total_gross` converts base + overtime at the profession's tax rate;
///    the allowance is untaxed and each service fee keeps its own tax
///    treatment.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidShiftInput`] for negative
/// worked hours or a zero-duration shift (end not strictly after start once
/// midnight crossings are normalized). Invalid shifts do not affect other
/// shifts in a batch.
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::calculation::compute_shift;
/// use shift_pay_engine::config::ConfigLoader;
/// use shift_pay_engine::models::ShiftInput;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// let loader = ConfigLoader::load("./config/gaffer")?;
/// let input = ShiftInput {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(21, 36, 0).unwrap(),
///     raw_worked_hours: Decimal::new(146, 1),
///     mentioned_keywords: HashSet::new(),
/// };
/// let record = compute_shift(loader.config(), &input)?;
/// println!("net: {}", record.total_net);
/// # Ok::<(), shift_pay_engine::error::EngineError>(())
/// ```
pub fn compute_shift(config: &ProjectConfig, input: &ShiftInput) -> EngineResult<ShiftRecord> {
    input.validate()?;

    let profession = &config.profession;
    let keywords = input.normalized_keywords();

    let meals = apply_meal_additions(input.raw_worked_hours, &keywords, &config.meals);
    let overtime = resolve_overtime(meals.adjusted_hours, profession, &config.tiers)?;

    // A shift shorter than the base duration is paid proportionally, never
    // the full base rate.
    let base_pay_net = if meals.adjusted_hours >= profession.base_shift_hours {
        profession.base_rate_net
    } else {
        round_currency(
            Decimal::from(profession.base_rate_net) * meals.adjusted_hours
                / profession.base_shift_hours,
        )?
    };
    let base_pay_gross = to_gross(base_pay_net, profession.tax_percentage)?;

    let fees = resolve_service_fees(&config.services, &keywords)?;

    let taxed_net = base_pay_net + overtime.earnings_net;
    let total_net = taxed_net + profession.daily_allowance + fees.fees_net;
    let total_gross = to_gross(taxed_net, profession.tax_percentage)?
        + profession.daily_allowance
        + fees.fees_gross;

    Ok(ShiftRecord {
        date: input.date,
        start_time: input.start_time,
        end_time: input.end_time,
        total_hours: meals.adjusted_hours,
        overtime_hours: overtime.overtime_hours,
        service_fees_net: fees.fees_net,
        service_fees_gross: fees.fees_gross,
        total_net,
        total_gross,
        breakdown: PayBreakdown {
            base_pay_net,
            base_pay_gross,
            meal_hours_added: meals.hours_added,
            overtime: overtime.breakdown,
            daily_allowance: profession.daily_allowance,
            services: fees.applied,
        },
    })
}
