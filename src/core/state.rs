//! Core `State` trait for machine states.
//!
//! All machine states implement this trait, which provides pure methods
//! for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// States are immutable values naming one condition of the automaton.
/// The name is the identifier used by hook registration and by error
/// messages, so it must be stable.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `PartialEq`: states must be comparable for transition resolution
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use semaforo::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///             Self::Locked => "locked",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for dispatch, display and logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states have no outgoing transitions. A cyclic machine such
    /// as a traffic light has none.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
