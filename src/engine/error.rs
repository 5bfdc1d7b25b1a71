//! Runtime errors raised by `send`.

use thiserror::Error;

/// Errors that can occur when firing an event.
///
/// Every variant leaves the machine's current state unchanged.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The event name is not present in the transition table at all.
    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    /// The event is known, but the current state has no outgoing edge
    /// for it. Unreachable on machines whose events are total over the
    /// state set, such as the traffic light.
    #[error("No transition for event '{event}' from state '{from}'")]
    NoTransition { event: String, from: String },

    /// An edge was found but its guard rejected the current state.
    #[error("Guard blocked transition from '{from}' to '{to}'")]
    GuardBlocked { from: String, to: String },
}
