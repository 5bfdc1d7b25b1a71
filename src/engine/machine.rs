//! The executable state machine.

use crate::core::{Event, State, StateHistory, TransitionRecord};
use crate::engine::error::TransitionError;
use crate::engine::hooks::HookRegistry;
use crate::engine::table::TransitionTable;
use chrono::Utc;

/// A machine holding one current state, a validated transition table,
/// a hook registry and the transition history.
///
/// The machine is fully synchronous: each [`send`](Machine::send) is an
/// atomic transition with no suspension points and no possibility of
/// partial completion. It is not thread-safe; concurrent callers must
/// serialize access externally.
///
/// Construct machines with
/// [`MachineBuilder`](crate::builder::MachineBuilder).
pub struct Machine<S: State, E: Event> {
    current: S,
    table: TransitionTable<S, E>,
    hooks: HookRegistry<S>,
    history: StateHistory<S>,
}

impl<S: State, E: Event> Machine<S, E> {
    pub(crate) fn new(initial: S, table: TransitionTable<S, E>) -> Self {
        Self {
            current: initial,
            table,
            hooks: HookRegistry::new(),
            history: StateHistory::new(),
        }
    }

    /// Get the current state (pure).
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine is in a final state (pure).
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get the transition history (pure).
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// The transition table this machine runs on (pure).
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Register the `before` hook for an event.
    ///
    /// The hook receives the event name, source state, target state and
    /// an optional message; whatever it returns becomes the return
    /// value of the `send` call. Registering again replaces the hook.
    pub fn before<F>(&mut self, event: impl Into<String>, hook: F)
    where
        F: Fn(&str, &S, &S, Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        self.hooks.set_before(event, hook);
    }

    /// Register the `on_exit` hook for a state name.
    pub fn on_exit<F>(&mut self, state: impl Into<String>, hook: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.hooks.set_on_exit(state, hook);
    }

    /// Register the `on_enter` hook for a state name.
    pub fn on_enter<F>(&mut self, state: impl Into<String>, hook: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.hooks.set_on_enter(state, hook);
    }

    /// Check whether `send(event)` would currently succeed (pure).
    pub fn can_fire(&self, event: &str) -> bool {
        self.table
            .resolve(&self.current, event)
            .is_some_and(|edge| edge.guard_allows(&self.current))
    }

    /// Fire an event by name.
    ///
    /// On success the machine advances to the mapped target state and
    /// the call returns whatever the `before` hook produced (`None` if
    /// no hook is registered). On failure the machine is untouched.
    ///
    /// Effect order: `before` hook, `on_exit` hook for the source
    /// state, state mutation (recorded in history), `on_enter` hook for
    /// the target state.
    pub fn send(&mut self, event: &str) -> Result<Option<String>, TransitionError> {
        self.fire(event, None)
    }

    /// Fire an event by name, passing a message through to the `before`
    /// hook.
    pub fn send_with(
        &mut self,
        event: &str,
        message: &str,
    ) -> Result<Option<String>, TransitionError> {
        self.fire(event, Some(message))
    }

    fn fire(
        &mut self,
        event: &str,
        message: Option<&str>,
    ) -> Result<Option<String>, TransitionError> {
        if !self.table.knows_event(event) {
            return Err(TransitionError::UnknownEvent {
                event: event.to_string(),
            });
        }

        let Some(edge) = self.table.resolve(&self.current, event) else {
            return Err(TransitionError::NoTransition {
                event: event.to_string(),
                from: self.current.name().to_string(),
            });
        };

        if !edge.guard_allows(&self.current) {
            return Err(TransitionError::GuardBlocked {
                from: self.current.name().to_string(),
                to: edge.to.name().to_string(),
            });
        }

        let target = edge.to.clone();

        let output = self.hooks.run_before(event, &self.current, &target, message);
        self.hooks.run_exit(&self.current);

        self.history = self.history.record(TransitionRecord {
            event: event.to_string(),
            from: self.current.clone(),
            to: target.clone(),
            timestamp: Utc::now(),
        });
        self.current = target;

        self.hooks.run_enter(&self.current);

        Ok(output)
    }
}
