//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::engine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// Rows are added in order; that order is the table order dispatch scans.
pub struct StateMachineBuilder<'ctx, S: State, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<'ctx, S, E>>,
}

impl<'ctx, S: State, E: Event> StateMachineBuilder<'ctx, S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the row is missing required fields.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<'ctx, S, E>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition row.
    pub fn add_transition(mut self, transition: Transition<'ctx, S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transition rows at once.
    pub fn transitions(mut self, transitions: Vec<Transition<'ctx, S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<'ctx, S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(StateMachine::new(initial, self.transitions))
    }
}

impl<'ctx, S: State, E: Event> Default for StateMachineBuilder<'ctx, S, E> {
    fn default() -> Self {
        Self::new()
    }
}
