//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::engine::{Machine, TransitionDef, TransitionTable};

/// Builder for constructing machines with a fluent API.
///
/// The edge set is validated at build time: a machine with no initial
/// state, no transitions, or two edges for the same `(state, event)`
/// pair is rejected.
pub struct MachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    edges: Vec<TransitionDef<S, E>>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            edges: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare an unguarded edge: `event` moves `from` to `to`.
    pub fn transition(mut self, event: E, from: S, to: S) -> Self {
        self.edges.push(TransitionDef::new(event, from, to));
        self
    }

    /// Declare a guarded edge; it only fires when the predicate accepts
    /// the current state.
    pub fn transition_when<F>(mut self, event: E, from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.edges
            .push(TransitionDef::new(event, from, to).when(predicate));
        self
    }

    /// Add a pre-built edge.
    pub fn add_edge(mut self, edge: TransitionDef<S, E>) -> Self {
        self.edges.push(edge);
        self
    }

    /// Build the machine, validating the edge set.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.edges.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        // Reject duplicate (from, event) pairs regardless of guards:
        // resolution must be unambiguous.
        for (i, edge) in self.edges.iter().enumerate() {
            let duplicated = self.edges[..i]
                .iter()
                .any(|earlier| earlier.event == edge.event && earlier.from == edge.from);
            if duplicated {
                return Err(BuildError::AmbiguousTransition {
                    event: edge.event.name().to_string(),
                    from: edge.from.name().to_string(),
                });
            }
        }

        Ok(Machine::new(initial, TransitionTable::new(self.edges)))
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
