//! Builder for constructing transition rows.

use crate::builder::error::BuildError;
use crate::core::{Context, Event, State};
use crate::engine::{StateHook, Transition, TransitionHook, TransitionResult};
use std::sync::Arc;

/// Builder for constructing transition rows with a fluent API.
///
/// `from`, `event`, and `to` are required; the three hooks and the context
/// payload are optional.
pub struct TransitionBuilder<'ctx, S: State, E: Event> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    on_enter: Option<StateHook<S, E>>,
    on_transition: Option<TransitionHook<S, E>>,
    on_exit: Option<StateHook<S, E>>,
    context: Option<&'ctx dyn Context>,
}

impl<'ctx, S: State, E: Event> TransitionBuilder<'ctx, S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            on_enter: None,
            on_transition: None,
            on_exit: None,
            context: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn event(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the entry hook for this row's source state (optional).
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &E, &S, Option<&dyn Context>) + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(hook));
        self
    }

    /// Set the hook deciding the transition outcome (optional; absent
    /// defaults to `Change`).
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &E, &S, Option<&dyn Context>) -> TransitionResult + Send + Sync + 'static,
    {
        self.on_transition = Some(Arc::new(hook));
        self
    }

    /// Set the exit hook run when leaving through this row (optional).
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &E, &S, Option<&dyn Context>) + Send + Sync + 'static,
    {
        self.on_exit = Some(Arc::new(hook));
        self
    }

    /// Attach a borrowed context payload (optional).
    pub fn context(mut self, context: &'ctx dyn Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Build the transition row.
    pub fn build(self) -> Result<Transition<'ctx, S, E>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            on_enter: self.on_enter,
            on_transition: self.on_transition,
            on_exit: self.on_exit,
            context: self.context,
        })
    }
}

impl<'ctx, S: State, E: Event> Default for TransitionBuilder<'ctx, S, E> {
    fn default() -> Self {
        Self::new()
    }
}
