//! Errors for calculator configuration and construction.

use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("idle label must not be empty")]
    EmptyIdleLabel,

    #[error("precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooHigh { precision: u32, max: u32 },

    #[error("exponent threshold must be finite and positive, got {0}")]
    InvalidExponentThreshold(f64),

    #[error("exponent threshold {threshold} exceeds the maximum of {max}")]
    ExponentThresholdTooHigh { threshold: f64, max: f64 },

    #[error("exponent digits {digits} exceeds the maximum of {max}")]
    TooManyExponentDigits { digits: usize, max: usize },

    #[error("journal capacity {capacity} exceeds the maximum of {max}")]
    JournalTooLarge { capacity: usize, max: usize },
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid calculator configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("malformed calculator configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
