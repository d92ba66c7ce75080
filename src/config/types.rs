//! Configuration types for shift pay computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. All configuration is
//! validated before any shift is computed and is immutable afterwards.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tiers::RateTierSet;
use crate::error::{EngineError, EngineResult};

/// Pay rules for a profession, owned by a project.
///
/// All currency fields are integers in the caller's smallest denomination.
/// Once validated, a `ProfessionConfig` is never mutated; configuration
/// changes apply only to shifts computed after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionConfig {
    /// The name of the position (e.g., "gaffer").
    pub position: String,
    /// Net pay for a full base shift.
    pub base_rate_net: i64,
    /// Tax percentage applied to base pay and overtime, in `[0, 100)`.
    pub tax_percentage: Decimal,
    /// Duration of a standard shift in hours.
    pub base_shift_hours: Decimal,
    /// Unpaid break hours per shift (informational; shift inputs arrive
    /// already net of unpaid breaks).
    #[serde(default)]
    pub break_hours: Decimal,
    /// Grace period in hours: overtime at or below this duration is unpaid.
    #[serde(default)]
    pub overtime_threshold_hours: Decimal,
    /// Granularity to which overtime is snapped (round-half-up).
    pub overtime_rounding_increment: Decimal,
    /// Untaxed daily allowance added to the net total.
    #[serde(default)]
    pub daily_allowance: i64,
    /// Free-text working conditions; informational only.
    #[serde(default)]
    pub conditions: String,
}

impl ProfessionConfig {
    /// Validates the profession's pay rules.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] for a non-positive base
    /// rate or shift duration, a tax percentage outside `[0, 100)`, negative
    /// break/threshold/allowance values, or a non-positive rounding
    /// increment.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_rate_net <= 0 {
            return Err(invalid("base_rate_net", "must be positive"));
        }
        validate_tax_percentage("tax_percentage", self.tax_percentage)?;
        if self.base_shift_hours <= Decimal::ZERO {
            return Err(invalid("base_shift_hours", "must be positive"));
        }
        if self.break_hours < Decimal::ZERO {
            return Err(invalid("break_hours", "cannot be negative"));
        }
        if self.overtime_threshold_hours < Decimal::ZERO {
            return Err(invalid("overtime_threshold_hours", "cannot be negative"));
        }
        if self.overtime_rounding_increment <= Decimal::ZERO {
            return Err(invalid("overtime_rounding_increment", "must be positive"));
        }
        if self.daily_allowance < 0 {
            return Err(invalid("daily_allowance", "cannot be negative"));
        }
        Ok(())
    }
}

/// A meal type that adds paid hours to a shift when mentioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealType {
    /// The name of the meal (e.g., "running lunch").
    pub name: String,
    /// Hours added to the shift when this meal is mentioned.
    pub adds_hours: Decimal,
    /// Keywords that trigger this meal, matched case-insensitively.
    /// When empty, the meal's own name is used as the only keyword.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl MealType {
    /// Validates the meal type.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "meal type name cannot be empty"));
        }
        if self.adds_hours <= Decimal::ZERO {
            return Err(invalid(
                "adds_hours",
                format!("meal type '{}' must add a positive number of hours", self.name),
            ));
        }
        Ok(())
    }

    /// Returns the lowercased keyword set, defaulting to the meal's name.
    pub fn keyword_set(&self) -> HashSet<String> {
        keyword_set_or_name(&self.keywords, &self.name)
    }
}

/// How a service fee is applied to a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationRule {
    /// The fee is added to every shift.
    PerShift,
    /// The fee is added only when one of the service's keywords is mentioned.
    OnMention,
}

/// An additional service fee with its own tax rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// The name of the service.
    pub name: String,
    /// Net cost of the service.
    pub cost_net: i64,
    /// Tax percentage for this service, in `[0, 100)`. Each service keeps
    /// its own tax treatment, distinct from the profession's.
    pub tax_percentage: Decimal,
    /// When the fee applies.
    pub application_rule: ApplicationRule,
    /// Keywords that trigger the fee under [`ApplicationRule::OnMention`].
    /// When empty, the service's own name is used as the only keyword.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ServiceConfig {
    /// Validates the service fee configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "service name cannot be empty"));
        }
        if self.cost_net <= 0 {
            return Err(invalid(
                "cost_net",
                format!("service '{}' must have a positive net cost", self.name),
            ));
        }
        validate_tax_percentage("tax_percentage", self.tax_percentage)?;
        Ok(())
    }

    /// Returns the lowercased keyword set, defaulting to the service's name.
    pub fn keyword_set(&self) -> HashSet<String> {
        keyword_set_or_name(&self.keywords, &self.name)
    }
}

/// The complete pay-rule configuration for one project.
///
/// Aggregates the profession, its overtime tiers, meal types, and service
/// fees. A validated `ProjectConfig` is immutable and may be shared across
/// threads; computing shifts for different projects concurrently requires
/// no coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// The profession's pay rules.
    pub profession: ProfessionConfig,
    /// Progressive overtime tiers.
    pub tiers: RateTierSet,
    /// Meal types that can add paid hours.
    #[serde(default)]
    pub meals: Vec<MealType>,
    /// Additional service fees.
    #[serde(default)]
    pub services: Vec<ServiceConfig>,
}

impl ProjectConfig {
    /// Validates every part of the project configuration.
    ///
    /// The tier set is already validated by construction; this re-checks the
    /// profession, meals, and services so a deserialized configuration fails
    /// closed as a whole.
    pub fn validate(&self) -> EngineResult<()> {
        self.profession.validate()?;
        for meal in &self.meals {
            meal.validate()?;
        }
        for service in &self.services {
            service.validate()?;
        }
        Ok(())
    }
}

/// Validates that a tax percentage is in `[0, 100)`.
///
/// 100% is rejected because the net→gross conversion divides by
/// `1 - tax/100`.
pub(crate) fn validate_tax_percentage(field: &str, tax: Decimal) -> EngineResult<()> {
    if tax < Decimal::ZERO || tax >= Decimal::ONE_HUNDRED {
        return Err(invalid(field, "must be at least 0 and below 100"));
    }
    Ok(())
}

fn keyword_set_or_name(keywords: &[String], name: &str) -> HashSet<String> {
    if keywords.is_empty() {
        return HashSet::from([name.to_lowercase()]);
    }
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfiguration {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTier;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_profession() -> ProfessionConfig {
        ProfessionConfig {
            position: "gaffer".to_string(),
            base_rate_net: 10_000,
            tax_percentage: dec("13"),
            base_shift_hours: dec("12"),
            break_hours: dec("1"),
            overtime_threshold_hours: dec("0.25"),
            overtime_rounding_increment: dec("0.5"),
            daily_allowance: 700,
            conditions: "on-set only".to_string(),
        }
    }

    #[test]
    fn test_valid_profession_accepted() {
        assert!(sample_profession().validate().is_ok());
    }

    #[test]
    fn test_zero_base_rate_rejected() {
        let mut profession = sample_profession();
        profession.base_rate_net = 0;
        assert!(matches!(
            profession.validate(),
            Err(EngineError::InvalidConfiguration { field, .. }) if field == "base_rate_net"
        ));
    }

    #[test]
    fn test_tax_of_100_percent_rejected() {
        let mut profession = sample_profession();
        profession.tax_percentage = dec("100");
        assert!(matches!(
            profession.validate(),
            Err(EngineError::InvalidConfiguration { field, .. }) if field == "tax_percentage"
        ));
    }

    #[test]
    fn test_negative_tax_rejected() {
        let mut profession = sample_profession();
        profession.tax_percentage = dec("-1");
        assert!(profession.validate().is_err());
    }

    #[test]
    fn test_zero_tax_accepted() {
        let mut profession = sample_profession();
        profession.tax_percentage = Decimal::ZERO;
        assert!(profession.validate().is_ok());
    }

    #[test]
    fn test_zero_rounding_increment_rejected() {
        let mut profession = sample_profession();
        profession.overtime_rounding_increment = Decimal::ZERO;
        assert!(profession.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut profession = sample_profession();
        profession.overtime_threshold_hours = dec("-0.5");
        assert!(profession.validate().is_err());
    }

    #[test]
    fn test_meal_keywords_default_to_name() {
        let meal = MealType {
            name: "Running Lunch".to_string(),
            adds_hours: dec("1"),
            keywords: vec![],
        };
        assert_eq!(meal.keyword_set(), HashSet::from(["running lunch".to_string()]));
    }

    #[test]
    fn test_meal_keywords_lowercased() {
        let meal = MealType {
            name: "late lunch".to_string(),
            adds_hours: dec("1"),
            keywords: vec!["Late Lunch".to_string(), "LATE".to_string()],
        };
        let keywords = meal.keyword_set();
        assert!(keywords.contains("late lunch"));
        assert!(keywords.contains("late"));
    }

    #[test]
    fn test_meal_with_zero_hours_rejected() {
        let meal = MealType {
            name: "lunch".to_string(),
            adds_hours: Decimal::ZERO,
            keywords: vec![],
        };
        assert!(meal.validate().is_err());
    }

    #[test]
    fn test_service_with_zero_cost_rejected() {
        let service = ServiceConfig {
            name: "rigging".to_string(),
            cost_net: 0,
            tax_percentage: dec("15"),
            application_rule: ApplicationRule::OnMention,
            keywords: vec![],
        };
        assert!(service.validate().is_err());
    }

    #[test]
    fn test_application_rule_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ApplicationRule::PerShift).unwrap(),
            "\"per_shift\""
        );
        let rule: ApplicationRule = serde_json::from_str("\"on_mention\"").unwrap();
        assert_eq!(rule, ApplicationRule::OnMention);
    }

    #[test]
    fn test_project_config_validates_all_parts() {
        let config = ProjectConfig {
            profession: sample_profession(),
            tiers: RateTierSet::new(vec![RateTier {
                order_num: 1,
                hours_from: Decimal::ZERO,
                hours_to: None,
                rate_net_per_hour: 500,
            }])
            .unwrap(),
            meals: vec![MealType {
                name: "lunch".to_string(),
                adds_hours: Decimal::ZERO, // invalid
                keywords: vec![],
            }],
            services: vec![],
        };
        assert!(config.validate().is_err());
    }
}
