//! The executable machine: validated transition table, hook registry
//! and the synchronous `send` loop.
//!
//! # Key Concepts
//!
//! - **Table**: explicit `(state, event) -> target` edges, no reflection
//! - **Hooks**: optional callbacks around each transition, dispatched
//!   through an explicit name-keyed lookup
//! - **Machine**: owns the current state and fires events atomically

mod error;
mod hooks;
mod machine;
mod table;

pub use error::TransitionError;
pub use hooks::{BeforeHook, HookRegistry, StateHook};
pub use machine::Machine;
pub use table::{TransitionDef, TransitionTable};
