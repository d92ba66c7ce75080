//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during shift pay computation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_pay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profession.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profession.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value violates a validation rule.
    ///
    /// Configuration errors are fatal: an invalid configuration is rejected
    /// before any shift is computed and is never partially applied.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift input was invalid or contained inconsistent data.
    ///
    /// Shift input errors are rejected per shift and do not affect other
    /// shifts in a batch.
    #[error("Invalid shift input: {message}")]
    InvalidShiftInput {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/profession.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/profession.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_configuration_displays_field_and_message() {
        let error = EngineError::InvalidConfiguration {
            field: "tax_percentage".to_string(),
            message: "must be below 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'tax_percentage': must be below 100"
        );
    }

    #[test]
    fn test_invalid_shift_input_displays_message() {
        let error = EngineError::InvalidShiftInput {
            message: "raw_worked_hours cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift input: raw_worked_hours cannot be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidShiftInput {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
