//! Core state machine types.
//!
//! This module contains the side-effect-free vocabulary of the engine:
//! - State and event definitions via the `State` and `Event` traits
//! - Type-tagged context payloads for transition rows
//! - Immutable history tracking
//!
//! Everything here is pure data; the dispatch logic lives in
//! [`crate::engine`].

mod context;
mod history;
mod state;

pub use context::{AsAny, Context, ContextTag, TaggedContext};
pub use history::{StateHistory, TransitionRecord};
pub use state::{Event, State};
