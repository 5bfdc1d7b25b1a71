//! Core `Event` trait for named transition triggers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine events.
///
/// Events are the named operations that drive transitions. The name is
/// the key a caller passes to [`Machine::send`](crate::engine::Machine::send)
/// and the key `before` hooks are registered under, so it must be stable.
///
/// The trait bounds mirror [`State`](crate::core::State): events are
/// immutable values carried in the transition table and compared during
/// resolution.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for dispatch, display and logging.
    fn name(&self) -> &str;
}
