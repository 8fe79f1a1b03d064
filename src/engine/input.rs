//! Discrete keypad events.

use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a token names no key on the keypad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key token")]
    Empty,

    #[error("unknown key '{0}'")]
    Unknown(String),
}

/// One button press forwarded by the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    /// An ASCII digit `0`-`9`.
    Digit(char),
    Operator(Operator),
    Decimal,
    Equal,
    Clear,
}

impl Key {
    /// Map a single keypad character to a key.
    ///
    /// ```rust
    /// use chaincalc::core::Operator;
    /// use chaincalc::engine::Key;
    ///
    /// assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
    /// assert_eq!(Key::from_char('*'), Some(Key::Operator(Operator::Multiply)));
    /// assert_eq!(Key::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '+' => Some(Self::Operator(Operator::Add)),
            '-' => Some(Self::Operator(Operator::Subtract)),
            '*' => Some(Self::Operator(Operator::Multiply)),
            '/' => Some(Self::Operator(Operator::Divide)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equal),
            'C' | 'c' => Some(Self::Clear),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(KeyParseError::Empty);
        }
        if token.eq_ignore_ascii_case("clear") || token.eq_ignore_ascii_case("ac") {
            return Ok(Self::Clear);
        }

        let mut chars = token.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        key.ok_or_else(|| KeyParseError::Unknown(token.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Decimal => f.write_str("."),
            Self::Equal => f.write_str("="),
            Self::Clear => f.write_str("C"),
        }
    }
}
