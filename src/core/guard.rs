//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! edge may fire from the current state.

use super::state::State;

/// Pure predicate that determines if a transition edge may fire.
///
/// Guards are evaluated after an edge has been resolved and before any
/// hook runs. They encapsulate pre-conditions as pure functions; a
/// rejected guard leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use semaforo::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     On,
///     Off,
///     Broken,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::On => "on",
///             Self::Off => "off",
///             Self::Broken => "broken",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// // Guard that only allows firing from non-final states
/// let usable = Guard::new(|state: &Lamp| !state.is_final());
///
/// assert!(usable.check(&Lamp::On));
/// assert!(!usable.check(&Lamp::Broken));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows firing from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        On,
        Off,
        Broken,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::On => "on",
                Self::Off => "off",
                Self::Broken => "broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &Lamp| matches!(s, Lamp::Off));

        assert!(guard.check(&Lamp::Off));
        assert!(!guard.check(&Lamp::On));
    }

    #[test]
    fn guard_checks_non_final_states() {
        let guard = Guard::new(|s: &Lamp| !s.is_final());

        assert!(guard.check(&Lamp::On));
        assert!(guard.check(&Lamp::Off));
        assert!(!guard.check(&Lamp::Broken));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &Lamp| !s.is_final());

        assert_eq!(guard.check(&Lamp::On), guard.check(&Lamp::On));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|s: &Lamp| matches!(s, Lamp::On | Lamp::Off));

        assert!(guard.check(&Lamp::On));
        assert!(guard.check(&Lamp::Off));
        assert!(!guard.check(&Lamp::Broken));
    }
}
