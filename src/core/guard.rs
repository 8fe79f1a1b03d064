//! Guard predicates for gating input events.
//!
//! Guards are pure boolean functions evaluated before an input is allowed to
//! move the engine. They replace ad-hoc flag checks scattered through the
//! handlers with named, testable predicates.

use std::fmt;

/// Pure predicate that determines if an input may act on the current context.
///
/// # Example
///
/// ```rust
/// use chaincalc::core::Guard;
///
/// let non_empty = Guard::new(|register: &String| !register.is_empty());
///
/// assert!(non_empty.check(&"12".to_string()));
/// assert!(!non_empty.check(&String::new()));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows acting on this context.
    pub fn check(&self, context: &T) -> bool {
        (self.predicate)(context)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
