//! Transition rows and dispatch outcomes.

use crate::core::{Context, Event, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of dispatching an event.
///
/// Returned by [`StateMachine::dispatch`](crate::engine::StateMachine::dispatch)
/// and by `on_transition` hooks. The engine itself only ever produces
/// `Change`, `NotFound`, or whatever the hook returned; `InvalidContext` is
/// a convention for hooks that were handed a payload of the wrong type (or
/// none where one was required) and is relayed unaltered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionResult {
    /// Transition applied, machine moved to the row's target state
    Change,

    /// Transition matched and ran, but the hook kept the current state
    NoChange,

    /// Transition aborted, machine returned to its initial state
    Reset,

    /// No row matches the current state and event
    NotFound,

    /// Hook convention: the row's context payload was missing or mistyped
    InvalidContext,
}

impl TransitionResult {
    /// Get the outcome's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Change => "Change",
            Self::NoChange => "NoChange",
            Self::Reset => "Reset",
            Self::NotFound => "NotFound",
            Self::InvalidContext => "InvalidContext",
        }
    }
}

/// Hook invoked when entering or leaving a state.
///
/// Arguments are `(from, event, to, context)` of the dispatched transition;
/// for entry hooks the context belongs to the entry row that resolved, not
/// necessarily the dispatched row.
pub type StateHook<S, E> = Arc<dyn Fn(&S, &E, &S, Option<&dyn Context>) + Send + Sync>;

/// Hook deciding the outcome of a matched transition.
pub type TransitionHook<S, E> =
    Arc<dyn Fn(&S, &E, &S, Option<&dyn Context>) -> TransitionResult + Send + Sync>;

/// One row of the dispatch table.
///
/// A row maps `(from, event)` to a target state, with three optional hooks
/// and an optional borrowed context payload. Rows are immutable once the
/// table is built; table order is semantically significant because dispatch
/// and entry-hook resolution both take the first match.
///
/// A row may also exist purely to supply a state's entry hook: dispatch
/// resolves the entering state's `on_enter` by scanning for the first row
/// whose `from` equals that state, independently of which row matched the
/// event.
pub struct Transition<'ctx, S: State, E: Event> {
    /// Source state this row matches
    pub from: S,
    /// Event this row matches
    pub event: E,
    /// Target state
    pub to: S,
    /// Hook run when this row's `from` state is entered
    pub on_enter: Option<StateHook<S, E>>,
    /// Hook deciding the transition outcome; absent means `Change`
    pub on_transition: Option<TransitionHook<S, E>>,
    /// Hook run when leaving `from` through this row
    pub on_exit: Option<StateHook<S, E>>,
    /// Borrowed payload handed to this row's hooks
    pub context: Option<&'ctx dyn Context>,
}

impl<'ctx, S: State, E: Event> Transition<'ctx, S, E> {
    /// Check whether this row matches the current state and event.
    pub fn matches(&self, current: &S, event: &E) -> bool {
        self.from == *current && self.event == *event
    }
}

impl<'ctx, S: State, E: Event> Clone for Transition<'ctx, S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event.clone(),
            to: self.to.clone(),
            on_enter: self.on_enter.clone(),
            on_transition: self.on_transition.clone(),
            on_exit: self.on_exit.clone(),
            context: self.context,
        }
    }
}
