//! State machine that dispatches events against a fixed transition table.

use crate::checkpoint::{Checkpoint, CheckpointError, MachineMetadata, CHECKPOINT_VERSION};
use crate::core::{Context, Event, State, StateHistory, TransitionRecord};
use crate::engine::transition::{Transition, TransitionResult};
use chrono::Utc;

/// A finite state machine over a fixed, ordered transition table.
///
/// The table is supplied once at construction and never mutated afterwards;
/// dispatching takes the first row matching `(current state, event)` in
/// table order, so duplicate keys are legal and the earliest row wins.
///
/// `dispatch` takes `&mut self`, which statically rules out a hook calling
/// back into the same machine: reentrant dispatch is a borrow error, not a
/// runtime hazard.
pub struct StateMachine<'ctx, S: State, E: Event> {
    initial: S,
    current: S,
    transitions: Vec<Transition<'ctx, S, E>>,
    history: StateHistory<S, E>,
    metadata: MachineMetadata,
}

impl<'ctx, S: State, E: Event> StateMachine<'ctx, S, E> {
    /// Create a machine in its initial state with the full transition table.
    pub fn new(initial: S, transitions: Vec<Transition<'ctx, S, E>>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions,
            history: StateHistory::new(),
            metadata: MachineMetadata::default(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the initial state fixed at construction (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the transition table (pure)
    pub fn transitions(&self) -> &[Transition<'ctx, S, E>] {
        &self.transitions
    }

    /// Get the history of applied transitions (pure)
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Get dispatch metadata (pure)
    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// Dispatch an event against the table.
    ///
    /// Selects the first row matching `(current state, event)`; with no
    /// match, returns [`TransitionResult::NotFound`] and leaves the state
    /// untouched. For a matched row the hooks run in a fixed order:
    ///
    /// 1. `on_transition` decides the outcome (absent means `Change`)
    /// 2. `on_exit` of the matched row
    /// 3. the entering state's entry hook, resolved as the first row in
    ///    table order whose `from` is the entering state and which declares
    ///    `on_enter` — called with the dispatched row's `(from, event, to)`
    ///    but the entry row's own context
    ///
    /// A `Reset` outcome reroutes entry to the initial state and moves the
    /// machine there; `NoChange` and `InvalidContext` run the hooks but
    /// leave the current state alone.
    pub fn dispatch(&mut self, event: E) -> TransitionResult {
        let matched = self
            .transitions
            .iter()
            .find(|row| row.matches(&self.current, &event))
            .cloned();

        let Some(row) = matched else {
            self.metadata.note_outcome(TransitionResult::NotFound);
            return TransitionResult::NotFound;
        };

        let result = match &row.on_transition {
            Some(hook) => hook(&row.from, &row.event, &row.to, row.context),
            None => TransitionResult::Change,
        };

        if let Some(hook) = &row.on_exit {
            hook(&row.from, &row.event, &row.to, row.context);
        }

        let entering = if result == TransitionResult::Reset {
            self.initial.clone()
        } else {
            row.to.clone()
        };

        // Entry hooks belong to the entering state, not the dispatched row:
        // the first row keyed by that state supplies the canonical hook.
        let entry = self
            .transitions
            .iter()
            .find(|candidate| candidate.from == entering && candidate.on_enter.is_some())
            .map(|candidate| (candidate.on_enter.clone(), candidate.context));

        if let Some((Some(hook), entry_context)) = entry {
            hook(&row.from, &row.event, &row.to, entry_context);
        }

        match result {
            TransitionResult::Change | TransitionResult::Reset => {
                self.history = self.history.record(TransitionRecord {
                    from: row.from,
                    event: row.event,
                    to: entering.clone(),
                    timestamp: Utc::now(),
                });
                self.current = entering;
            }
            _ => {}
        }

        self.metadata.note_outcome(result);
        result
    }

    /// Unconditionally return to the initial state. No hooks fire and no
    /// history is recorded.
    pub fn reset_state(&mut self) {
        self.current = self.initial.clone();
    }

    /// Look up the context of the first row matching the exact
    /// `(from, event, to)` triple, or `None` if no row matches.
    pub fn context(&self, from: &S, event: &E, to: &S) -> Option<&'ctx dyn Context> {
        self.transitions
            .iter()
            .find(|row| row.from == *from && row.event == *event && row.to == *to)
            .and_then(|row| row.context)
    }

    /// Adopt a previously captured checkpoint.
    ///
    /// The checkpoint must carry the current format version, the same
    /// initial state as this machine, and a current state this machine's
    /// table can represent (appearing as `from` or `to` of some row, or
    /// equal to the initial state).
    pub fn restore(&mut self, checkpoint: &Checkpoint<S, E>) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.initial_state != self.initial {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint initial state '{}' does not match machine initial state '{}'",
                checkpoint.initial_state.name(),
                self.initial.name()
            )));
        }

        if !self.covers(&checkpoint.current_state) {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint current state '{}' is unknown to the transition table",
                checkpoint.current_state.name()
            )));
        }

        self.current = checkpoint.current_state.clone();
        self.history = checkpoint.history.clone();
        self.metadata = checkpoint.metadata.clone();
        Ok(())
    }

    fn covers(&self, state: &S) -> bool {
        *state == self.initial
            || self
                .transitions
                .iter()
                .any(|row| row.from == *state || row.to == *state)
    }
}
