//! Configuration for the outlier filters.
//!
//! Each call takes a [`FilterConfig`] by value. The defaults depend on the
//! method: 1.5 for Tukey's fences, 3.0 for the z-score band.

use serde::{Deserialize, Serialize};

use crate::types::OutlierMethod;

/// How much input checking happens before the bounds are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValidationMode {
    /// No input checks beyond column lookup and dtype. Non-finite values
    /// from the log transform propagate into the bounds and comparisons.
    #[default]
    Permissive,
    /// Reject empty datasets, nulls, non-finite values and values outside
    /// the log transform domain before computing anything.
    Strict,
}

/// Parameters of one filter call.
///
/// # Example
///
/// ```rust,ignore
/// use lex_outliers::{FilterConfig, OutlierMethod};
///
/// let config = FilterConfig::builder(OutlierMethod::Iqr)
///     .log_scale(true)
///     .right(3.0)
///     .build()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Apply the natural log before computing bounds.
    /// Default: false
    pub log_scale: bool,

    /// Multiplier for the lower bound (IQR or standard deviations).
    /// Default: 1.5 for IQR, 3.0 for z-score
    pub left: f64,

    /// Multiplier for the upper bound (IQR or standard deviations).
    /// Default: 1.5 for IQR, 3.0 for z-score
    pub right: f64,

    /// Input validation mode.
    /// Default: Permissive
    #[serde(default)]
    pub validation: ValidationMode,
}

impl FilterConfig {
    /// Defaults for Tukey's fences.
    pub fn iqr() -> Self {
        Self::for_method(OutlierMethod::Iqr)
    }

    /// Defaults for the z-score band.
    pub fn z_score() -> Self {
        Self::for_method(OutlierMethod::ZScore)
    }

    pub fn for_method(method: OutlierMethod) -> Self {
        let k = method.default_multiplier();
        Self {
            log_scale: false,
            left: k,
            right: k,
            validation: ValidationMode::default(),
        }
    }

    /// Create a new configuration builder seeded with the method's defaults.
    pub fn builder(method: OutlierMethod) -> FilterConfigBuilder {
        FilterConfigBuilder::new(method)
    }

    pub fn is_strict(&self) -> bool {
        self.validation == ValidationMode::Strict
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (side, value) in [("left", self.left), ("right", self.right)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::InvalidMultiplier {
                    side: side.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid {side} multiplier: {value} (must be finite and non-negative)")]
    InvalidMultiplier { side: String, value: f64 },
}

/// Builder for [`FilterConfig`] with fluent API.
#[derive(Debug)]
pub struct FilterConfigBuilder {
    method: OutlierMethod,
    log_scale: Option<bool>,
    left: Option<f64>,
    right: Option<f64>,
    validation: Option<ValidationMode>,
}

impl FilterConfigBuilder {
    fn new(method: OutlierMethod) -> Self {
        Self {
            method,
            log_scale: None,
            left: None,
            right: None,
            validation: None,
        }
    }

    /// Enable or disable the log transform.
    ///
    /// IQR uses `ln(x)` and requires strictly positive values; the z-score
    /// rule uses `ln(x + 1)` and accepts zero.
    pub fn log_scale(mut self, enable: bool) -> Self {
        self.log_scale = Some(enable);
        self
    }

    /// Set the lower bound multiplier.
    pub fn left(mut self, k: f64) -> Self {
        self.left = Some(k);
        self
    }

    /// Set the upper bound multiplier.
    pub fn right(mut self, k: f64) -> Self {
        self.right = Some(k);
        self
    }

    /// Set both multipliers at once.
    pub fn multipliers(self, left: f64, right: f64) -> Self {
        self.left(left).right(right)
    }

    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = Some(mode);
        self
    }

    /// Shorthand for `validation(ValidationMode::Strict)`.
    pub fn strict(self) -> Self {
        self.validation(ValidationMode::Strict)
    }

    /// Build the configuration.
    ///
    /// Returns a validated `FilterConfig` or an error if validation fails.
    pub fn build(self) -> Result<FilterConfig, ConfigValidationError> {
        let k = self.method.default_multiplier();
        let config = FilterConfig {
            log_scale: self.log_scale.unwrap_or(false),
            left: self.left.unwrap_or(k),
            right: self.right.unwrap_or(k),
            validation: self.validation.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
