//! Configuration and construction of calculators.
//!
//! This module provides the serde-backed configuration, its validation, and
//! a fluent builder producing a ready [`Calculator`](crate::Calculator).

pub mod calculator;
pub mod config;
pub mod error;
pub mod macros;

pub use calculator::CalculatorBuilder;
pub use config::{CalculatorConfig, ResultEntry};
pub use error::{BuildError, ConfigError};
