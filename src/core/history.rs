//! Transition history tracking.
//!
//! Provides an immutable in-memory log of completed transitions. There
//! is no persistence layer; the history lives and dies with the machine.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed transition.
///
/// Records are immutable values naming the event that fired, the states
/// it moved between and when it happened.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// Name of the event that fired
    pub event: String,
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of completed transitions.
///
/// History is immutable - [`record`](StateHistory::record) returns a new
/// history with the record added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use semaforo::core::State;
/// use semaforo::light::traffic_light;
///
/// let mut sm = traffic_light();
/// sm.send("cycle").unwrap();
/// sm.send("cycle").unwrap();
///
/// let path = sm.history().path();
/// let names: Vec<&str> = path.iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["green", "yellow", "red"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not mutated.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the starting state, then
    /// the `to` state of each record. Empty when nothing has fired yet.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }
}
