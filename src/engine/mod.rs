//! Event dispatch over a fixed transition table.
//!
//! This module is the imperative shell around the pure core:
//!
//! - **Transitions**: immutable table rows with optional hooks and a
//!   borrowed context payload
//! - **State machine**: scans the table in order, runs the matched row's
//!   hooks, and updates the current state
//!
//! Dispatch is synchronous and runs to completion on the caller's thread;
//! there is no internal locking, no I/O, and no suspension point. Hosts
//! that share a machine across threads provide their own exclusion.

mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::{StateHook, Transition, TransitionHook, TransitionResult};
