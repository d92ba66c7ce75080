//! Configuration for the payroll engine.
//!
//! This module contains the strongly-typed pay-rule configuration
//! (profession, progressive overtime tiers, meal types, service fees),
//! the validation rules that make invalid configurations unconstructible,
//! and the YAML loader.

mod loader;
mod tiers;
mod types;

pub use loader::ConfigLoader;
pub use tiers::{RateTier, RateTierSet};
pub use types::{ApplicationRule, MealType, ProfessionConfig, ProjectConfig, ServiceConfig};

pub(crate) use types::validate_tax_percentage;
