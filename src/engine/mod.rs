//! The keypad-driven calculator engine.
//!
//! The engine consumes discrete input events and exposes two strings for a
//! host to render: the display value and the history trace.
//!
//! # Key Concepts
//!
//! - **Register**: the number being typed, kept exactly as typed
//! - **Accumulator**: the pending left operand and operator
//! - **Chaining**: a result stays in the accumulator as the next left operand
//! - **Guards**: named predicates deciding whether a press acts at all

mod calculator;
mod error;
mod input;

pub use calculator::{Accumulator, Calculator, Snapshot};
pub use error::{EngineError, MATH_ERROR, OPERATOR_ERROR};
pub use input::{Key, KeyParseError};
