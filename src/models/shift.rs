//! Shift input model.
//!
//! This module defines [`ShiftInput`], the per-shift data handed to the
//! engine by the surrounding system: the raw worked-hours figure (already
//! net of unpaid breaks) and the keyword set matched by the external report
//! parser.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in a day, used to normalize shifts that cross midnight.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A reported work shift, before pay computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// The date the shift started.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift. May be numerically earlier than
    /// `start_time` for shifts that cross midnight.
    pub end_time: NaiveTime,
    /// Worked hours as reported, already net of unpaid breaks.
    pub raw_worked_hours: Decimal,
    /// Keywords matched in the shift report by the external parser.
    #[serde(default)]
    pub mentioned_keywords: HashSet<String>,
}

impl ShiftInput {
    /// Validates the shift input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftInput`] if `raw_worked_hours` is
    /// negative, or if `end_time` is not strictly after `start_time` once
    /// midnight-crossing shifts are normalized.
    pub fn validate(&self) -> EngineResult<()> {
        if self.raw_worked_hours < Decimal::ZERO {
            return Err(EngineError::InvalidShiftInput {
                message: "raw_worked_hours cannot be negative".to_string(),
            });
        }
        if self.normalized_duration_minutes() <= 0 {
            return Err(EngineError::InvalidShiftInput {
                message: format!(
                    "end_time {} must be strictly after start_time {}",
                    self.end_time, self.start_time
                ),
            });
        }
        Ok(())
    }

    /// Returns the shift duration in hours, normalizing shifts that cross
    /// midnight by adding 24 hours when the end time is numerically earlier
    /// than the start time.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::ShiftInput;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    /// use std::collections::HashSet;
    ///
    /// let shift = ShiftInput {
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     raw_worked_hours: Decimal::new(80, 1),
    ///     mentioned_keywords: HashSet::new(),
    /// };
    /// assert_eq!(shift.normalized_duration_hours(), Decimal::new(80, 1)); // 8.0
    /// ```
    pub fn normalized_duration_hours(&self) -> Decimal {
        Decimal::new(self.normalized_duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns the mentioned keywords lowercased for case-insensitive
    /// matching.
    pub fn normalized_keywords(&self) -> HashSet<String> {
        self.mentioned_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect()
    }

    fn normalized_duration_minutes(&self) -> i64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if minutes < 0 {
            minutes + MINUTES_PER_DAY
        } else {
            minutes
        }
    }
}
