//! Builder for constructing calculators.

use crate::builder::config::{CalculatorConfig, ResultEntry};
use crate::builder::error::BuildError;
use crate::engine::Calculator;

/// Builder for constructing calculators with a fluent API.
///
/// ```rust
/// use chaincalc::builder::{CalculatorBuilder, ResultEntry};
///
/// let calc = CalculatorBuilder::new()
///     .idle_label("Basic")
///     .precision(2)
///     .result_entry(ResultEntry::StartNew)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.history_trace(), "Basic");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a builder starting from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Label shown in the history trace before any input.
    pub fn idle_label(mut self, label: impl Into<String>) -> Self {
        self.config.idle_label = label.into();
        self
    }

    /// Decimal places kept in results.
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Magnitude at which results switch to exponential notation.
    pub fn exponent_threshold(mut self, threshold: f64) -> Self {
        self.config.exponent_threshold = threshold;
        self
    }

    pub fn exponent_digits(mut self, digits: usize) -> Self {
        self.config.exponent_digits = digits;
        self
    }

    pub fn journal_capacity(mut self, capacity: usize) -> Self {
        self.config.journal_capacity = capacity;
        self
    }

    pub fn result_entry(mut self, policy: ResultEntry) -> Self {
        self.config.result_entry = policy;
        self
    }

    /// Build the calculator.
    /// Returns every configuration problem at once if validation fails.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let config = self.config.checked()?;
        Ok(Calculator::from_config(&config))
    }
}
