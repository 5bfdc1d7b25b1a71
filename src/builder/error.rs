//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Ambiguous transition: event '{event}' from state '{from}' is declared more than once")]
    AmbiguousTransition { event: String, from: String },
}
