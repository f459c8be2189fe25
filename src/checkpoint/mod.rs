//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint is a serializable snapshot of a machine's mutable state:
//! current state, history, and dispatch metadata. Transition rows are never
//! serialized — hooks and borrowed contexts cannot survive a process
//! boundary — so resuming means rebuilding the table and calling
//! [`StateMachine::restore`](crate::engine::StateMachine::restore) with a
//! captured checkpoint. What the host does with the encoded bytes is its
//! own business; the engine stays in-memory.

use crate::core::{Event, State, StateHistory};
use crate::engine::{StateMachine, TransitionResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Dispatch metadata tracked by a state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was created
    pub created_at: DateTime<Utc>,

    /// Last dispatch time
    pub updated_at: DateTime<Utc>,

    /// Total number of dispatch calls
    pub dispatch_count: u64,

    /// Dispatch outcomes by result name
    pub outcomes: HashMap<String, u64>,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
            outcomes: HashMap::new(),
        }
    }
}

impl MachineMetadata {
    /// Count one dispatch outcome and refresh the update time.
    pub fn note_outcome(&mut self, result: TransitionResult) {
        self.updated_at = Utc::now();
        self.dispatch_count += 1;
        *self.outcomes.entry(result.name().to_string()).or_insert(0) += 1;
    }
}

/// Serializable checkpoint of state machine state.
/// Does NOT include transition rows (hooks and contexts are not
/// serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, E: Event> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition history
    pub history: StateHistory<S, E>,

    /// Machine metadata
    pub metadata: MachineMetadata,
}

impl<S: State, E: Event> Checkpoint<S, E> {
    /// Capture a snapshot of the machine's mutable state.
    pub fn capture(machine: &StateMachine<'_, S, E>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: machine.initial_state().clone(),
            current_state: machine.current_state().clone(),
            history: machine.history().clone(),
            metadata: machine.metadata().clone(),
        }
    }

    /// Encode as human-readable JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON produced by [`to_json`](Checkpoint::to_json).
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from binary produced by [`to_bytes`](Checkpoint::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Transition;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum PumpState {
        Off,
        Priming,
        Running,
    }

    impl State for PumpState {
        fn name(&self) -> &str {
            match self {
                Self::Off => "Off",
                Self::Priming => "Priming",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum PumpEvent {
        Enable,
        Primed,
        Disable,
    }

    impl Event for PumpEvent {
        fn name(&self) -> &str {
            match self {
                Self::Enable => "Enable",
                Self::Primed => "Primed",
                Self::Disable => "Disable",
            }
        }
    }

    fn table() -> Vec<Transition<'static, PumpState, PumpEvent>> {
        vec![
            Transition {
                from: PumpState::Off,
                event: PumpEvent::Enable,
                to: PumpState::Priming,
                on_enter: None,
                on_transition: None,
                on_exit: None,
                context: None,
            },
            Transition {
                from: PumpState::Priming,
                event: PumpEvent::Primed,
                to: PumpState::Running,
                on_enter: None,
                on_transition: None,
                on_exit: None,
                context: None,
            },
            Transition {
                from: PumpState::Running,
                event: PumpEvent::Disable,
                to: PumpState::Off,
                on_enter: None,
                on_transition: None,
                on_exit: None,
                context: None,
            },
        ]
    }

    #[test]
    fn capture_snapshots_machine_state() {
        let mut machine = StateMachine::new(PumpState::Off, table());
        machine.dispatch(PumpEvent::Enable);

        let checkpoint = Checkpoint::capture(&machine);

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.initial_state, PumpState::Off);
        assert_eq!(checkpoint.current_state, PumpState::Priming);
        assert_eq!(checkpoint.history.records().len(), 1);
        assert_eq!(checkpoint.metadata.dispatch_count, 1);
    }

    #[test]
    fn restore_resumes_from_checkpoint() {
        let mut machine = StateMachine::new(PumpState::Off, table());
        machine.dispatch(PumpEvent::Enable);
        machine.dispatch(PumpEvent::Primed);

        let checkpoint = Checkpoint::capture(&machine);

        // Fresh machine over the same table adopts the snapshot.
        let mut resumed = StateMachine::new(PumpState::Off, table());
        resumed.restore(&checkpoint).unwrap();

        assert_eq!(resumed.current_state(), &PumpState::Running);
        assert_eq!(resumed.history().records().len(), 2);
        assert_eq!(resumed.metadata().dispatch_count, 2);

        // And keeps dispatching from where it left off.
        assert_eq!(
            resumed.dispatch(PumpEvent::Disable),
            TransitionResult::Change
        );
        assert_eq!(resumed.current_state(), &PumpState::Off);
    }

    #[test]
    fn restore_rejects_unsupported_version() {
        let machine = StateMachine::new(PumpState::Off, table());
        let mut checkpoint = Checkpoint::capture(&machine);
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let mut target = StateMachine::new(PumpState::Off, table());
        let result = target.restore(&checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn restore_rejects_mismatched_initial_state() {
        let machine = StateMachine::new(PumpState::Off, table());
        let checkpoint = Checkpoint::capture(&machine);

        let mut target = StateMachine::new(PumpState::Running, table());
        let result = target.restore(&checkpoint);

        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn restore_rejects_state_foreign_to_table() {
        let machine = StateMachine::new(PumpState::Off, table());
        let mut checkpoint = Checkpoint::capture(&machine);
        checkpoint.current_state = PumpState::Running;

        // A table that never mentions Running cannot represent the
        // checkpoint's current state.
        let stub = vec![Transition {
            from: PumpState::Off,
            event: PumpEvent::Enable,
            to: PumpState::Priming,
            on_enter: None,
            on_transition: None,
            on_exit: None,
            context: None,
        }];
        let mut target = StateMachine::new(PumpState::Off, stub);
        let result = target.restore(&checkpoint);

        assert!(matches!(result, Err(CheckpointError::ValidationFailed(_))));
    }

    #[test]
    fn json_round_trip() {
        let mut machine = StateMachine::new(PumpState::Off, table());
        machine.dispatch(PumpEvent::Enable);

        let checkpoint = Checkpoint::capture(&machine);
        let json = checkpoint.to_json().unwrap();
        let decoded: Checkpoint<PumpState, PumpEvent> = Checkpoint::from_json(&json).unwrap();

        assert_eq!(decoded.id, checkpoint.id);
        assert_eq!(decoded.current_state, checkpoint.current_state);
        assert_eq!(decoded.history.records().len(), 1);
    }

    #[test]
    fn bytes_round_trip() {
        let mut machine = StateMachine::new(PumpState::Off, table());
        machine.dispatch(PumpEvent::Enable);

        let checkpoint = Checkpoint::capture(&machine);
        let bytes = checkpoint.to_bytes().unwrap();
        let decoded: Checkpoint<PumpState, PumpEvent> = Checkpoint::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.id, checkpoint.id);
        assert_eq!(decoded.current_state, checkpoint.current_state);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let result: Result<Checkpoint<PumpState, PumpEvent>, _> = Checkpoint::from_json("not json");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn metadata_default_starts_empty() {
        let metadata = MachineMetadata::default();
        assert_eq!(metadata.dispatch_count, 0);
        assert!(metadata.outcomes.is_empty());
        assert_eq!(metadata.created_at, metadata.updated_at);
    }

    #[test]
    fn note_outcome_accumulates_counts() {
        let mut metadata = MachineMetadata::default();

        metadata.note_outcome(TransitionResult::Change);
        metadata.note_outcome(TransitionResult::Change);
        metadata.note_outcome(TransitionResult::NotFound);

        assert_eq!(metadata.dispatch_count, 3);
        assert_eq!(metadata.outcomes.get("Change"), Some(&2));
        assert_eq!(metadata.outcomes.get("NotFound"), Some(&1));
        assert!(metadata.updated_at >= metadata.created_at);
    }
}
