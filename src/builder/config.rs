//! Calculator configuration.
//!
//! Configuration is plain serde data. Validation accumulates every problem
//! instead of stopping at the first one, so a host gets a complete report in
//! a single pass.

use crate::builder::error::{BuildError, ConfigError};
use crate::format::{
    NumberFormat, DEFAULT_EXPONENT_DIGITS, DEFAULT_EXPONENT_THRESHOLD, DEFAULT_PRECISION,
};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Largest supported number of decimal places.
pub const MAX_PRECISION: u32 = 10;

/// Largest supported number of fractional digits in exponential notation.
pub const MAX_EXPONENT_DIGITS: usize = 16;

/// Largest magnitude that may still render as a plain decimal.
pub const MAX_EXPONENT_THRESHOLD: f64 = 1e21;

/// Largest number of transitions the journal may hold.
pub const MAX_JOURNAL_CAPACITY: usize = 4096;

/// Label shown in the history trace when nothing has been entered.
pub const DEFAULT_IDLE_LABEL: &str = "Standard";

pub const DEFAULT_JOURNAL_CAPACITY: usize = 64;

/// What a digit or decimal press right after a result does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultEntry {
    /// Start over and swallow the press.
    #[default]
    Reset,
    /// Start over and apply the press to the fresh entry.
    StartNew,
}

/// Settings for a [`Calculator`](crate::Calculator).
///
/// Missing fields take their defaults when deserialized.
///
/// ```rust
/// use chaincalc::builder::{CalculatorConfig, ResultEntry};
///
/// let config = CalculatorConfig::from_json(r#"{ "precision": 2, "result_entry": "start_new" }"#)
///     .unwrap();
/// assert_eq!(config.precision, 2);
/// assert_eq!(config.result_entry, ResultEntry::StartNew);
/// assert_eq!(config.idle_label, "Standard");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub idle_label: String,
    pub precision: u32,
    pub exponent_threshold: f64,
    pub exponent_digits: usize,
    /// Number of transitions kept in the journal; zero disables it.
    pub journal_capacity: usize,
    pub result_entry: ResultEntry,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            idle_label: DEFAULT_IDLE_LABEL.to_string(),
            precision: DEFAULT_PRECISION,
            exponent_threshold: DEFAULT_EXPONENT_THRESHOLD,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
            result_entry: ResultEntry::Reset,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self = serde_json::from_str(json)?;
        config.checked()
    }

    /// Check every rule, collecting ALL problems.
    pub fn validate(&self) -> Validation<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.idle_label.trim().is_empty() {
            errors.push(ConfigError::EmptyIdleLabel);
        }
        if self.precision > MAX_PRECISION {
            errors.push(ConfigError::PrecisionTooHigh {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        if !(self.exponent_threshold.is_finite() && self.exponent_threshold > 0.0) {
            errors.push(ConfigError::InvalidExponentThreshold(
                self.exponent_threshold,
            ));
        } else if self.exponent_threshold > MAX_EXPONENT_THRESHOLD {
            errors.push(ConfigError::ExponentThresholdTooHigh {
                threshold: self.exponent_threshold,
                max: MAX_EXPONENT_THRESHOLD,
            });
        }
        if self.exponent_digits > MAX_EXPONENT_DIGITS {
            errors.push(ConfigError::TooManyExponentDigits {
                digits: self.exponent_digits,
                max: MAX_EXPONENT_DIGITS,
            });
        }
        if self.journal_capacity > MAX_JOURNAL_CAPACITY {
            errors.push(ConfigError::JournalTooLarge {
                capacity: self.journal_capacity,
                max: MAX_JOURNAL_CAPACITY,
            });
        }

        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(errors)
        }
    }

    /// Validate, turning accumulated problems into a [`BuildError`].
    pub fn checked(self) -> Result<Self, BuildError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(errors)),
        }
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.precision,
            exponent_threshold: self.exponent_threshold,
            exponent_digits: self.exponent_digits,
        }
    }
}
