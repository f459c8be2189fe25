//! Switchyard: a table-driven finite state machine engine
//!
//! Switchyard dispatches events against a fixed, ordered table of
//! transitions over two closed, host-defined symbol sets. It was designed
//! for control software on constrained targets: dispatch is a synchronous
//! linear scan with no allocation beyond history bookkeeping, no internal
//! locking, and no panic paths in library code.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed enumerations supplied by the host via the
//!   `State` and `Event` traits (or the `state_enum!`/`event_enum!` macros)
//! - **Transition**: an immutable table row `(from, event, to)` with
//!   optional entry/transition/exit hooks and an optional type-tagged
//!   context payload
//! - **Dispatch**: the first row matching `(current state, event)` wins;
//!   its hooks run in a fixed order and the returned `TransitionResult`
//!   decides where the machine lands
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::{simple_transition, StateMachineBuilder};
//! use switchyard::engine::TransitionResult;
//! use switchyard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum ValveState {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! event_enum! {
//!     enum ValveEvent {
//!         OpenRequested,
//!         CloseRequested,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(ValveState::Closed)
//!     .add_transition(simple_transition(
//!         ValveState::Closed,
//!         ValveEvent::OpenRequested,
//!         ValveState::Open,
//!     ))
//!     .add_transition(simple_transition(
//!         ValveState::Open,
//!         ValveEvent::CloseRequested,
//!         ValveState::Closed,
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.dispatch(ValveEvent::OpenRequested), TransitionResult::Change);
//! assert_eq!(machine.current_state(), &ValveState::Open);
//!
//! // An event no row matches is a normal outcome, not an error.
//! assert_eq!(machine.dispatch(ValveEvent::OpenRequested), TransitionResult::NotFound);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Context, ContextTag, Event, State, StateHistory, TaggedContext, TransitionRecord};
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError, MachineMetadata};
pub use engine::{StateHook, StateMachine, Transition, TransitionHook, TransitionResult};
