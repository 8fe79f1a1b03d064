//! Binary operators and their evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a token does not name one of the four operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized operator '{0}'")]
pub struct UnknownOperator(pub String);

/// One of the four arithmetic operators on the keypad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Token appended to the history trace.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator as `lhs op rhs`.
    ///
    /// Division by zero is not special-cased: it yields infinity or NaN
    /// following IEEE 754.
    ///
    /// ```rust
    /// use chaincalc::core::Operator;
    ///
    /// assert_eq!(Operator::Multiply.evaluate(4.0, 3.0), 12.0);
    /// assert!(Operator::Divide.evaluate(1.0, 0.0).is_infinite());
    /// ```
    pub fn evaluate(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
