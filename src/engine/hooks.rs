//! Lifecycle hook registry.
//!
//! Hooks are optional callbacks invoked at fixed points around a
//! transition. Dispatch is an explicit lookup: each phase has a map
//! keyed by event or state name, holding at most one callback per key.

use crate::core::State;
use std::collections::HashMap;

/// Callback invoked before a transition fires.
///
/// Receives the event name, the source state, the target state and an
/// optional message. Its return value becomes the return value of the
/// `send` call that triggered it.
pub type BeforeHook<S> = Box<dyn Fn(&str, &S, &S, Option<&str>) -> Option<String> + Send + Sync>;

/// Callback invoked when a state is exited or entered.
pub type StateHook<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Lookup table mapping `(event | state, phase)` to an optional callback.
///
/// - `before` hooks are keyed by event name and run first.
/// - `on_exit` hooks are keyed by the source state's name and run
///   before the state mutates.
/// - `on_enter` hooks are keyed by the target state's name and run
///   after the state mutates.
///
/// Registering a callback for an occupied slot replaces the previous
/// one; each slot holds at most one callback.
pub struct HookRegistry<S: State> {
    before: HashMap<String, BeforeHook<S>>,
    on_exit: HashMap<String, StateHook<S>>,
    on_enter: HashMap<String, StateHook<S>>,
}

impl<S: State> Default for HookRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> HookRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            before: HashMap::new(),
            on_exit: HashMap::new(),
            on_enter: HashMap::new(),
        }
    }

    /// Register the `before` hook for an event.
    pub fn set_before<F>(&mut self, event: impl Into<String>, hook: F)
    where
        F: Fn(&str, &S, &S, Option<&str>) -> Option<String> + Send + Sync + 'static,
    {
        self.before.insert(event.into(), Box::new(hook));
    }

    /// Register the `on_exit` hook for a state.
    pub fn set_on_exit<F>(&mut self, state: impl Into<String>, hook: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.on_exit.insert(state.into(), Box::new(hook));
    }

    /// Register the `on_enter` hook for a state.
    pub fn set_on_enter<F>(&mut self, state: impl Into<String>, hook: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.on_enter.insert(state.into(), Box::new(hook));
    }

    /// Invoke the `before` hook for this event, if registered.
    pub fn run_before(
        &self,
        event: &str,
        source: &S,
        target: &S,
        message: Option<&str>,
    ) -> Option<String> {
        self.before
            .get(event)
            .and_then(|hook| hook(event, source, target, message))
    }

    /// Invoke the `on_exit` hook for this state, if registered.
    pub fn run_exit(&self, state: &S) {
        if let Some(hook) = self.on_exit.get(state.name()) {
            hook(state);
        }
    }

    /// Invoke the `on_enter` hook for this state, if registered.
    pub fn run_enter(&self, state: &S) {
        if let Some(hook) = self.on_enter.get(state.name()) {
            hook(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Lamp {
        On,
        Off,
    }

    impl State for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::On => "on",
                Self::Off => "off",
            }
        }
    }

    #[test]
    fn missing_hook_yields_none() {
        let registry: HookRegistry<Lamp> = HookRegistry::new();

        assert!(registry
            .run_before("switch", &Lamp::Off, &Lamp::On, None)
            .is_none());
        registry.run_exit(&Lamp::Off);
        registry.run_enter(&Lamp::On);
    }

    #[test]
    fn before_hook_return_value_is_forwarded() {
        let mut registry: HookRegistry<Lamp> = HookRegistry::new();
        registry.set_before("switch", |event, source, target, _message| {
            Some(format!("{event}: {} -> {}", source.name(), target.name()))
        });

        let out = registry.run_before("switch", &Lamp::Off, &Lamp::On, None);
        assert_eq!(out.as_deref(), Some("switch: off -> on"));
    }

    #[test]
    fn before_hook_receives_message() {
        let mut registry: HookRegistry<Lamp> = HookRegistry::new();
        registry.set_before("switch", |_event, _source, _target, message| {
            message.map(str::to_string)
        });

        let out = registry.run_before("switch", &Lamp::Off, &Lamp::On, Some("hello"));
        assert_eq!(out.as_deref(), Some("hello"));
    }

    #[test]
    fn state_hooks_dispatch_by_name() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry: HookRegistry<Lamp> = HookRegistry::new();

        let exit_log = Arc::clone(&log);
        registry.set_on_exit("off", move |state: &Lamp| {
            exit_log.lock().unwrap().push(format!("exit {}", state.name()));
        });

        let enter_log = Arc::clone(&log);
        registry.set_on_enter("on", move |state: &Lamp| {
            enter_log.lock().unwrap().push(format!("enter {}", state.name()));
        });

        registry.run_exit(&Lamp::Off);
        registry.run_enter(&Lamp::On);
        // hooks registered for other names stay silent
        registry.run_exit(&Lamp::On);
        registry.run_enter(&Lamp::Off);

        assert_eq!(*log.lock().unwrap(), ["exit off", "enter on"]);
    }

    #[test]
    fn registering_twice_replaces_the_hook() {
        let mut registry: HookRegistry<Lamp> = HookRegistry::new();
        registry.set_before("switch", |_, _, _, _| Some("first".to_string()));
        registry.set_before("switch", |_, _, _, _| Some("second".to_string()));

        let out = registry.run_before("switch", &Lamp::Off, &Lamp::On, None);
        assert_eq!(out.as_deref(), Some("second"));
    }
}
