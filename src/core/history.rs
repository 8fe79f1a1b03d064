//! Bounded journal of phase transitions.
//!
//! Every handled input is recorded with the phase it started from, the phase
//! it ended in and the key token that caused it. The journal is purely
//! observational; the engine never reads it back.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single handled input.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Empty,
///     to: Phase::Pending,
///     input: "+".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Phase before the input was handled
    pub from: S,
    /// Phase after the input was handled
    pub to: S,
    /// Key token of the input
    pub input: String,
    /// When the input was handled
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the input moved the machine to a different phase.
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, capacity-bounded history of transitions.
///
/// When the journal is full the oldest entry is dropped. A capacity of zero
/// disables recording.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::{Phase, StateTransition, TransitionLog};
/// use chrono::Utc;
///
/// let mut log = TransitionLog::with_capacity(2);
/// for input in ["1", "+", "2"] {
///     log.record(StateTransition {
///         from: Phase::Empty,
///         to: Phase::Empty,
///         input: input.to_string(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// let inputs: Vec<&str> = log.transitions().iter().map(|t| t.input.as_str()).collect();
/// assert_eq!(inputs, vec!["+", "2"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    capacity: usize,
    transitions: VecDeque<StateTransition<S>>,
}

impl<S: State> TransitionLog<S> {
    /// Create an empty journal holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    /// Append a transition, evicting the oldest entry when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the `from` phase of the oldest entry followed by the `to` phase
    /// of each entry.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Elapsed time between the oldest and newest entry.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Recorded transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn transition(from: Phase, to: Phase, input: &str) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            input: input.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<Phase> = TransitionLog::with_capacity(8);
        assert!(log.is_empty());
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_adds_transition() {
        let mut log = TransitionLog::with_capacity(8);
        log.record(transition(Phase::Empty, Phase::Empty, "5"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn zero_capacity_disables_recording() {
        let mut log = TransitionLog::with_capacity(0);
        log.record(transition(Phase::Empty, Phase::Pending, "+"));
        assert!(log.is_empty());
    }

    #[test]
    fn full_log_evicts_oldest() {
        let mut log = TransitionLog::with_capacity(2);
        log.record(transition(Phase::Empty, Phase::Empty, "1"));
        log.record(transition(Phase::Empty, Phase::Pending, "+"));
        log.record(transition(Phase::Pending, Phase::Pending, "2"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.transitions()[0].input, "+");
        assert_eq!(log.transitions()[1].input, "2");
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let mut log = TransitionLog::with_capacity(8);
        log.record(transition(Phase::Empty, Phase::Pending, "+"));
        log.record(transition(Phase::Pending, Phase::Operand, "="));

        let path = log.get_path();
        assert_eq!(path, vec![&Phase::Empty, &Phase::Pending, &Phase::Operand]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut log = TransitionLog::with_capacity(8);
        log.record(transition(Phase::Empty, Phase::Empty, "1"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        log.record(transition(Phase::Empty, Phase::Pending, "+"));

        let duration = log.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn sustained_recording_keeps_the_newest_entries_in_order() {
        let mut log = TransitionLog::with_capacity(3);
        for n in 0..1000 {
            log.record(transition(Phase::Empty, Phase::Empty, &n.to_string()));
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.capacity(), 3);
        let inputs: Vec<&str> = log.transitions().iter().map(|t| t.input.as_str()).collect();
        assert_eq!(inputs, vec!["997", "998", "999"]);
    }

    #[test]
    fn changed_phase_detects_moves() {
        assert!(transition(Phase::Empty, Phase::Pending, "+").changed_phase());
        assert!(!transition(Phase::Empty, Phase::Empty, "7").changed_phase());
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::with_capacity(4);
        log.record(transition(Phase::Empty, Phase::Pending, "+"));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.transitions(), deserialized.transitions());
    }
}
