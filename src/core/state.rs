//! Phase vocabulary for the calculator state machine.
//!
//! The engine's observable position is described by a small enum of phases.
//! Phases are pure values: they carry no operands and can be compared,
//! logged and serialized freely.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "off",
///             Self::On => "on",
///         }
///     }
///
///     fn is_initial(&self) -> bool {
///         matches!(self, Self::Off)
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "on");
/// assert!(Lamp::Off.is_initial());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the phase a freshly reset machine sits in.
    ///
    /// Default implementation returns `false`.
    fn is_initial(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Depth of the accumulator, i.e. how much of a binary operation is pending.
    pub enum Phase {
        /// Nothing committed; digits may be building up in the register.
        Empty => "empty",
        /// A left operand is held (a previous result) but no operator yet.
        Operand => "operand",
        /// A left operand and an operator wait for the right operand.
        Pending => "pending",
    }
    initial: [Empty]
}
