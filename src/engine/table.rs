//! The explicit transition table.
//!
//! Transitions are plain data: an edge from `(source state, event)` to a
//! target state, optionally guarded. The table is the single source of
//! truth for which events exist and where they lead.

use crate::core::{Event, Guard, State};

/// A single edge of the transition table.
pub struct TransitionDef<S: State, E: Event> {
    /// The event that fires this edge
    pub event: E,
    /// The source state
    pub from: S,
    /// The target state
    pub to: S,
    /// Optional predicate; a rejected guard blocks the edge
    pub guard: Option<Guard<S>>,
}

impl<S: State, E: Event> TransitionDef<S, E> {
    /// Create an unguarded edge.
    pub fn new(event: E, from: S, to: S) -> Self {
        Self {
            event,
            from,
            to,
            guard: None,
        }
    }

    /// Attach a guard predicate to this edge.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Check the guard against the current state. Unguarded edges
    /// always pass.
    pub fn guard_allows(&self, current: &S) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(current))
    }

    /// Check if this edge can fire from the current state (pure).
    pub fn can_fire(&self, current: &S) -> bool {
        *current == self.from && self.guard_allows(current)
    }
}

/// Explicit mapping from `(state, event)` to target state.
///
/// Built only from validated edge sets: the builder rejects duplicate
/// `(from, event)` pairs before a table is constructed, so resolution
/// is unambiguous.
pub struct TransitionTable<S: State, E: Event> {
    edges: Vec<TransitionDef<S, E>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub(crate) fn new(edges: Vec<TransitionDef<S, E>>) -> Self {
        Self { edges }
    }

    /// Check whether any edge anywhere fires on this event name.
    pub fn knows_event(&self, event: &str) -> bool {
        self.edges.iter().any(|e| e.event.name() == event)
    }

    /// Find the edge leaving `from` on `event`, if one is declared.
    ///
    /// Guards are not consulted here; the caller distinguishes a missing
    /// edge from a guarded refusal.
    pub fn resolve(&self, from: &S, event: &str) -> Option<&TransitionDef<S, E>> {
        self.edges
            .iter()
            .find(|e| e.event.name() == event && e.from == *from)
    }

    /// All declared edges in declaration order.
    pub fn edges(&self) -> &[TransitionDef<S, E>] {
        &self.edges
    }
}
