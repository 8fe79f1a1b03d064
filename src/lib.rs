//! Chaincalc: a keypad-driven calculator engine
//!
//! Chaincalc interprets a stream of discrete button presses (digits,
//! operators, decimal point, equals, clear) as a running calculation and
//! exposes two strings for a host UI to render: the display value and a
//! history trace of everything entered since the last reset.
//!
//! # Core Concepts
//!
//! - **Phase**: how much of a binary operation is pending, via the `State` trait
//! - **Guards**: pure predicates deciding whether a press acts at all
//! - **Chaining**: each result stays available as the next left operand
//! - **Formatting**: compensated rounding with exponential notation for large values
//!
//! # Example
//!
//! ```rust
//! use chaincalc::{Calculator, Key, Operator};
//!
//! let mut calc = Calculator::new();
//! for key in [
//!     Key::Digit('2'),
//!     Key::Operator(Operator::Add),
//!     Key::Digit('2'),
//!     Key::Equal,
//!     Key::Operator(Operator::Multiply),
//!     Key::Digit('3'),
//!     Key::Equal,
//! ] {
//!     calc.press(key);
//! }
//!
//! assert_eq!(calc.display_value(), "12");
//! assert_eq!(calc.history_trace(), "2+2*3");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod format;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig, ResultEntry};
pub use core::{Guard, Operator, Phase, State, StateTransition, TransitionLog};
pub use engine::{Accumulator, Calculator, Key, Snapshot};
pub use format::format_result;
