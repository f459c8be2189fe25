//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating dispatch
//! tables with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::engine::Transition;

/// Create a bare transition row: no hooks, no context.
///
/// # Example
///
/// ```
/// use switchyard::builder::simple_transition;
/// use switchyard::{event_enum, state_enum};
///
/// state_enum! {
///     enum LampState {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum LampEvent {
///         Toggle,
///     }
/// }
///
/// let row = simple_transition(LampState::Off, LampEvent::Toggle, LampState::On);
/// ```
pub fn simple_transition<'ctx, S, E>(from: S, event: E, to: S) -> Transition<'ctx, S, E>
where
    S: State,
    E: Event,
{
    Transition {
        from,
        event,
        to,
        on_enter: None,
        on_transition: None,
        on_exit: None,
        context: None,
    }
}
