//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining shift
//! pay, including meal-hour adjustment, progressive overtime resolution,
//! net to gross tax conversion, service fee resolution, and the shift
//! calculator that composes them into one record.

mod meal_adjustment;
mod overtime;
mod service_fees;
mod shift_calculator;
mod tax;

pub use meal_adjustment::{MealAdjustmentResult, apply_meal_additions};
pub use overtime::{OvertimeResult, resolve_overtime};
pub use service_fees::{ServiceFeeResult, resolve_service_fees};
pub use shift_calculator::compute_shift;
pub use tax::to_gross;
