//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a project's
//! pay-rule configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::tiers::RateTierSet;
use super::types::{MealType, ProfessionConfig, ProjectConfig, ServiceConfig};

/// Loads and provides access to a project's pay-rule configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them as a whole, and hands out the immutable [`ProjectConfig`]
/// used for shift computation.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gaffer/
/// ├── profession.yaml  # Pay rules for the position
/// ├── tiers.yaml       # Progressive overtime tiers
/// ├── meals.yaml       # Meal types (optional)
/// └── services.yaml    # Additional service fees (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gaffer").unwrap();
/// println!("Position: {}", loader.config().profession.position);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProjectConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gaffer")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `profession.yaml` or `tiers.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The configuration violates a validation rule
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_pay_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gaffer")?;
    /// # Ok::<(), shift_pay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let profession = Self::load_yaml::<ProfessionConfig>(&path.join("profession.yaml"))?;

        // Tier validation runs during deserialization via RateTierSet's
        // TryFrom impl.
        let tiers = Self::load_yaml::<RateTierSet>(&path.join("tiers.yaml"))?;

        let meals = Self::load_optional_yaml::<Vec<MealType>>(&path.join("meals.yaml"))?;
        let services = Self::load_optional_yaml::<Vec<ServiceConfig>>(&path.join("services.yaml"))?;

        let config = ProjectConfig {
            profession,
            tiers,
            meals: meals.unwrap_or_default(),
            services: services.unwrap_or_default(),
        };
        config.validate()?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a YAML file that may legitimately be absent.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    /// Returns the validated project configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/gaffer"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().profession.position, "gaffer");
        assert_eq!(loader.config().profession.base_rate_net, 10_000);
    }

    #[test]
    fn test_loaded_profession_values() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let profession = &loader.config().profession;

        assert_eq!(profession.tax_percentage, dec("13"));
        assert_eq!(profession.base_shift_hours, dec("12"));
        assert_eq!(profession.overtime_threshold_hours, dec("0.25"));
        assert_eq!(profession.overtime_rounding_increment, dec("0.5"));
        assert_eq!(profession.daily_allowance, 700);
    }

    #[test]
    fn test_loaded_tiers_are_ordered() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tiers = loader.config().tiers.tiers();

        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].hours_from, Decimal::ZERO);
        assert_eq!(tiers[0].hours_to, Some(dec("2")));
        assert_eq!(tiers[0].rate_net_per_hour, 500);
        assert!(tiers[1].hours_to.is_none());
        assert_eq!(tiers[1].rate_net_per_hour, 600);
    }

    #[test]
    fn test_loaded_meals_and_services() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.config().meals.len(), 2);
        assert_eq!(loader.config().meals[0].name, "running lunch");
        assert_eq!(loader.config().services.len(), 2);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("profession.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
