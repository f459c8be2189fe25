//! Core `State` and `Event` traits for state machine symbol sets.
//!
//! A machine is defined over two closed, host-supplied enumerations: the
//! states it can occupy and the events it reacts to. Both are modeled as
//! traits with identical bounds so the dispatch table can compare, clone,
//! and snapshot them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// Dispatch only ever compares states for equality; the remaining bounds
/// serve diagnostics, history records, and checkpointing.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: states are compared during table scans
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ValveState {
///     Closed,
///     Opening,
///     Open,
/// }
///
/// impl State for ValveState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///             Self::Open => "Open",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for state machine events.
///
/// Events are the external stimuli dispatched to a machine. Like states,
/// they form a closed enumeration and the engine only requires equality;
/// the rest of the bounds mirror [`State`] so events can appear in history
/// records and checkpoints.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ValveEvent {
///     OpenRequested,
///     LimitReached,
///     CloseRequested,
/// }
///
/// impl Event for ValveEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::OpenRequested => "OpenRequested",
///             Self::LimitReached => "LimitReached",
///             Self::CloseRequested => "CloseRequested",
///         }
///     }
/// }
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Faulted,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Faulted => "Faulted",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Faulted.name(), "Faulted");
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Stop.name(), "Stop");
    }

    #[test]
    fn states_are_comparable() {
        assert_eq!(TestState::Idle, TestState::Idle);
        assert_ne!(TestState::Idle, TestState::Running);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn event_serializes_correctly() {
        let event = TestEvent::Stop;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
