//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the shift
//! calculation and statistics endpoints.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftInput, ShiftRecord};
use crate::statistics::PeriodFilter;

/// Request body for the `/shifts/calculate` endpoint.
///
/// Carries one reported shift; the pay-rule configuration is server-side
/// state loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCalculationRequest {
    /// The date the shift started.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift (may cross midnight).
    pub end_time: NaiveTime,
    /// Worked hours as reported, already net of unpaid breaks.
    pub raw_worked_hours: Decimal,
    /// Keywords matched in the shift report by the external parser.
    #[serde(default)]
    pub mentioned_keywords: HashSet<String>,
}

impl From<ShiftCalculationRequest> for ShiftInput {
    fn from(req: ShiftCalculationRequest) -> Self {
        ShiftInput {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            raw_worked_hours: req.raw_worked_hours,
            mentioned_keywords: req.mentioned_keywords,
        }
    }
}

/// Request body for the `/statistics` and `/statistics/csv` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsRequest {
    /// The project's computed shift records.
    pub shifts: Vec<ShiftRecord>,
    /// The period to filter to.
    #[serde(default = "default_filter")]
    pub filter: PeriodFilter,
    /// The midnight boundary of "today" for period filtering. Defaults to
    /// the server's local date when omitted.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

fn default_filter() -> PeriodFilter {
    PeriodFilter::All
}
