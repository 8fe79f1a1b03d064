//! Engine faults.
//!
//! Faults never cross the public API. The engine resets itself and surfaces
//! the fault's sentinel string on the display instead.

use crate::core::Phase;
use thiserror::Error;

/// Display sentinel for an accumulator reaching an impossible depth.
pub const OPERATOR_ERROR: &str = "Operator Error";

/// Display sentinel for an operator token that cannot be evaluated.
pub const MATH_ERROR: &str = "Math Error";

/// Sequencing anomalies detected while handling an input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("cannot evaluate unrecognized operator '{0}'")]
    UnknownOperator(String),

    #[error("no operand in the register while the accumulator is {phase}")]
    MissingOperand { phase: Phase },

    #[error("register '{0}' does not hold a number")]
    InvalidOperand(String),
}

impl EngineError {
    /// The string shown on the display after the engine resets.
    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::UnknownOperator(_) => MATH_ERROR,
            Self::MissingOperand { .. } | Self::InvalidOperand(_) => OPERATOR_ERROR,
        }
    }
}
