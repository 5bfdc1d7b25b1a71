//! Semaforo: a synchronous table-driven state machine with lifecycle hooks.
//!
//! Machines are defined as explicit data: an enumerated state set, an
//! enumerated event set, and a validated table of `(state, event) -> target`
//! edges. Firing an event is an atomic, synchronous transition that runs
//! optional hooks in a fixed order: `before` (whose return value `send`
//! forwards to the caller), `on_exit` for the source state, the state
//! mutation, then `on_enter` for the target state.
//!
//! # Core Concepts
//!
//! - **State / Event**: type-safe vocabulary via the `State` and `Event` traits
//! - **Table**: explicit transition edges, validated at construction
//! - **Hooks**: optional callbacks dispatched through a name-keyed lookup
//! - **History**: immutable tracking of fired transitions
//!
//! The crate ships one concrete machine, the traffic light in
//! [`light`], cycling green -> yellow -> red -> green.
//!
//! # Example
//!
//! ```rust
//! use semaforo::builder::MachineBuilder;
//! use semaforo::core::State;
//! use semaforo::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Open => "open",
//!         Closed => "closed",
//!     }
//! }
//!
//! event_enum! {
//!     enum DoorEvent {
//!         Toggle => "toggle",
//!     }
//! }
//!
//! let mut door = MachineBuilder::new()
//!     .initial(Door::Closed)
//!     .transition(DoorEvent::Toggle, Door::Closed, Door::Open)
//!     .transition(DoorEvent::Toggle, Door::Open, Door::Closed)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(door.current_state().name(), "closed");
//! door.send("toggle").unwrap();
//! assert_eq!(door.current_state(), &Door::Open);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod light;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{Event, Guard, State, StateHistory, TransitionRecord};
pub use crate::engine::{Machine, TransitionError};
