//! Threshold configuration for the flag evaluators.
//!
//! The defaults are the calibrated cutoffs every caller gets unless it
//! explicitly loads something else:
//!
//! | Rule | Threshold | Default |
//! |---|---|---|
//! | Interest coverage | GREEN at or above | 2 |
//! | Revenue scale | GREEN at or above | 50,000,000 |
//! | Leverage | GREEN at or below | 0.25 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {0:?}")]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Returns every validation error, empty if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

/// Cutoffs used by the flag evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Minimum interest coverage ratio for GREEN.
    #[serde(default = "default_iscr_green_min")]
    pub iscr_green_min: Decimal,

    /// Minimum net revenue for GREEN.
    #[serde(default = "default_revenue_green_min")]
    pub revenue_green_min: Decimal,

    /// Maximum borrowing-to-revenue ratio for GREEN.
    #[serde(default = "default_leverage_green_max")]
    pub leverage_green_max: Decimal,
}

fn default_iscr_green_min() -> Decimal {
    dec!(2)
}

fn default_revenue_green_min() -> Decimal {
    dec!(50000000)
}

fn default_leverage_green_max() -> Decimal {
    dec!(0.25)
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            iscr_green_min: default_iscr_green_min(),
            revenue_green_min: default_revenue_green_min(),
            leverage_green_max: default_leverage_green_max(),
        }
    }
}

impl RuleThresholds {
    /// Sets the interest coverage cutoff.
    #[must_use]
    pub fn with_iscr_green_min(mut self, value: Decimal) -> Self {
        self.iscr_green_min = value;
        self
    }

    /// Sets the revenue scale cutoff.
    #[must_use]
    pub fn with_revenue_green_min(mut self, value: Decimal) -> Self {
        self.revenue_green_min = value;
        self
    }

    /// Sets the leverage ceiling.
    #[must_use]
    pub fn with_leverage_green_max(mut self, value: Decimal) -> Self {
        self.leverage_green_max = value;
        self
    }

    /// Loads and validates thresholds from JSON. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let thresholds: Self = serde_json::from_str(json)?;
        thresholds.validate_or_error()?;
        Ok(thresholds)
    }

    /// Loads and validates thresholds from TOML. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let thresholds: Self = toml::from_str(source)?;
        thresholds.validate_or_error()?;
        Ok(thresholds)
    }
}

impl Validate for RuleThresholds {
    fn validate(&self) -> Vec<ValidationError> {
        [
            ("iscr_green_min", self.iscr_green_min),
            ("revenue_green_min", self.revenue_green_min),
            ("leverage_green_max", self.leverage_green_max),
        ]
        .into_iter()
        .filter(|(_, value)| *value <= Decimal::ZERO)
        .map(|(field, value)| ValidationError::new(field, format!("must be positive, got {value}")))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = RuleThresholds::default();
        assert_eq!(thresholds.iscr_green_min, dec!(2));
        assert_eq!(thresholds.revenue_green_min, dec!(50000000));
        assert_eq!(thresholds.leverage_green_max, dec!(0.25));
        assert!(thresholds.is_valid());
    }

    #[test]
    fn test_from_json_partial() {
        let thresholds = RuleThresholds::from_json_str(r#"{"iscr_green_min": 1.5}"#).unwrap();
        assert_eq!(thresholds.iscr_green_min, dec!(1.5));
        assert_eq!(thresholds.revenue_green_min, dec!(50000000));
    }

    #[test]
    fn test_from_toml() {
        let source = "revenue_green_min = 100000000\nleverage_green_max = 0.5\n";
        let thresholds = RuleThresholds::from_toml_str(source).unwrap();
        assert_eq!(thresholds.revenue_green_min, dec!(100000000));
        assert_eq!(thresholds.leverage_green_max, dec!(0.5));
        assert_eq!(thresholds.iscr_green_min, dec!(2));
    }

    #[test]
    fn test_single_validation_error() {
        let err = RuleThresholds::from_json_str(r#"{"leverage_green_max": 0}"#).unwrap_err();
        match err {
            ConfigError::Validation { field, .. } => assert_eq!(field, "leverage_green_max"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multiple_validation_errors() {
        let thresholds = RuleThresholds::default()
            .with_iscr_green_min(dec!(-1))
            .with_revenue_green_min(Decimal::ZERO);
        assert_eq!(thresholds.validate().len(), 2);
        assert!(matches!(
            thresholds.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(errors)) if errors.len() == 2
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            RuleThresholds::from_json_str("{"),
            Err(ConfigError::Deserialization(_))
        ));
        assert!(matches!(
            RuleThresholds::from_toml_str("iscr_green_min = "),
            Err(ConfigError::Deserialization(_))
        ));
    }
}
