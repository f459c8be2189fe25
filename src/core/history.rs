//! State transition history tracking.
//!
//! Provides immutable tracking of applied transitions over time. Only
//! dispatches that actually move the machine are recorded; `NoChange`,
//! `NotFound`, and `InvalidContext` outcomes leave history untouched.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// `to` is the effective destination: for a reset outcome it is the
/// machine's initial state, not the matched row's target.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, Event, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Mode { Standby, Active }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Standby => "Standby",
///             Self::Active => "Active",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Input { Wake }
///
/// impl Event for Input {
///     fn name(&self) -> &str { "Wake" }
/// }
///
/// let record = TransitionRecord {
///     from: Mode::Standby,
///     event: Input::Wake,
///     to: Mode::Active,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state actually entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable: [`record`](StateHistory::record) returns a new
/// history with the entry added. On memory-constrained targets a host can
/// bound growth by checkpointing and rebuilding the machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    records: Vec<TransitionRecord<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::core::{State, Event, StateHistory, TransitionRecord};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Step { A, B }
    /// impl State for Step {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::A => "A",
    ///             Self::B => "B",
    ///         }
    ///     }
    /// }
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Tick { Next }
    /// impl Event for Tick {
    ///     fn name(&self) -> &str { "Next" }
    /// }
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(TransitionRecord {
    ///     from: Step::A,
    ///     event: Tick::Next,
    ///     to: Step::B,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.records().len(), 1);
    /// assert_eq!(history.records().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord<S, E>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first record's `from`,
    /// then the `to` state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last recorded transition.
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
    pub fn records(&self) -> &[TransitionRecord<S, E>] {
        &self.records
    }
}
