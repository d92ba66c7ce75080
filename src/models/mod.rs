//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod shift;
mod shift_record;

pub use shift::ShiftInput;
pub use shift_record::{AppliedServiceFee, PayBreakdown, ShiftRecord, TierEarnings};
