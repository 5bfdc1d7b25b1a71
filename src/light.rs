//! The traffic light machine.
//!
//! Three states and one event cycling between them:
//!
//! ```text
//! green --cycle--> yellow --cycle--> red --cycle--> green
//! ```
//!
//! The machine is cyclic: no terminal state, initial state green. Its
//! `before` hook formats a message describing each transition, which
//! `send` returns to the caller.

use crate::builder::MachineBuilder;
use crate::core::State;
use crate::engine::Machine;
use crate::{event_enum, state_enum};

state_enum! {
    /// One lamp of the traffic light.
    pub enum LightState {
        Green => "green",
        Yellow => "yellow",
        Red => "red",
    }
}

event_enum! {
    /// The only event the traffic light understands.
    pub enum LightEvent {
        Cycle => "cycle",
    }
}

/// Name of the `cycle` event, as passed to `send`.
pub const CYCLE: &str = "cycle";

/// Build the traffic light machine.
///
/// Starts at green and advances one lamp per [`CYCLE`] event. The
/// preinstalled `before` hook makes `send` return a description of the
/// transition; callers may attach their own `on_exit`/`on_enter` hooks
/// per state.
///
/// ```
/// use semaforo::light::traffic_light;
///
/// let mut sm = traffic_light();
/// let said = sm.send("cycle").unwrap();
/// assert_eq!(said.as_deref(), Some("Running cycle from green to yellow"));
/// ```
pub fn traffic_light() -> Machine<LightState, LightEvent> {
    let mut machine = MachineBuilder::new()
        .initial(LightState::Green)
        .transition(LightEvent::Cycle, LightState::Green, LightState::Yellow)
        .transition(LightEvent::Cycle, LightState::Yellow, LightState::Red)
        .transition(LightEvent::Cycle, LightState::Red, LightState::Green)
        .build()
        .expect("traffic light definition is a valid cycle");

    machine.before(
        CYCLE,
        |event, source: &LightState, target: &LightState, message| {
            let suffix = match message {
                Some(m) => format!(". {m}"),
                None => String::new(),
            };
            Some(format!(
                "Running {event} from {} to {}{suffix}",
                source.name(),
                target.name()
            ))
        },
    );

    machine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TransitionError;

    #[test]
    fn initial_state_is_green() {
        let sm = traffic_light();
        assert_eq!(sm.current_state(), &LightState::Green);
        assert_eq!(sm.current_state().name(), "green");
    }

    #[test]
    fn cycle_visits_each_lamp_in_order() {
        let mut sm = traffic_light();

        sm.send(CYCLE).unwrap();
        assert_eq!(sm.current_state(), &LightState::Yellow);

        sm.send(CYCLE).unwrap();
        assert_eq!(sm.current_state(), &LightState::Red);

        sm.send(CYCLE).unwrap();
        assert_eq!(sm.current_state(), &LightState::Green);
    }

    #[test]
    fn three_cycles_close_the_loop() {
        let mut sm = traffic_light();
        for _ in 0..3 {
            sm.send(CYCLE).unwrap();
        }
        assert_eq!(sm.current_state(), &LightState::Green);
    }

    #[test]
    fn before_hook_describes_each_transition() {
        let mut sm = traffic_light();

        let said = sm.send(CYCLE).unwrap();
        assert_eq!(said.as_deref(), Some("Running cycle from green to yellow"));

        let said = sm.send(CYCLE).unwrap();
        assert_eq!(said.as_deref(), Some("Running cycle from yellow to red"));

        let said = sm.send(CYCLE).unwrap();
        assert_eq!(said.as_deref(), Some("Running cycle from red to green"));
    }

    #[test]
    fn message_is_appended_to_the_description() {
        let mut sm = traffic_light();

        let said = sm.send_with(CYCLE, "pedestrian waiting").unwrap();
        assert_eq!(
            said.as_deref(),
            Some("Running cycle from green to yellow. pedestrian waiting")
        );
    }

    #[test]
    fn unknown_event_is_rejected() {
        let mut sm = traffic_light();

        let err = sm.send("blink").unwrap_err();
        assert!(matches!(err, TransitionError::UnknownEvent { .. }));
        assert_eq!(sm.current_state(), &LightState::Green);
    }

    #[test]
    fn the_light_never_reaches_a_final_state() {
        let mut sm = traffic_light();
        for _ in 0..6 {
            assert!(!sm.is_final());
            sm.send(CYCLE).unwrap();
        }
    }
}
