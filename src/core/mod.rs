//! Core calculator types and logic.
//!
//! This module contains the pure building blocks the engine is made of:
//! - Phase definitions via the `State` trait
//! - Guard predicates gating input events
//! - Binary operators and their evaluation
//! - A bounded journal of phase transitions
//!
//! Nothing in this module holds engine state.

mod guard;
mod history;
mod operator;
mod state;

pub use guard::Guard;
pub use history::{StateTransition, TransitionLog};
pub use operator::{Operator, UnknownOperator};
pub use state::{Phase, State};
