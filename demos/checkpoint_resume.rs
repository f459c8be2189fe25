//! Checkpoint and Resume
//!
//! This example demonstrates capturing a machine's mutable state and
//! resuming a freshly built machine from it. Transition rows are never
//! serialized; the host rebuilds the table and adopts the snapshot.
//!
//! Run with: cargo run --example checkpoint_resume

use switchyard::builder::{simple_transition, StateMachineBuilder};
use switchyard::checkpoint::Checkpoint;
use switchyard::core::State;
use switchyard::engine::{StateMachine, Transition};
use switchyard::{event_enum, state_enum};

state_enum! {
    enum BatchState {
        Queued,
        Mixing,
        Curing,
    }
}

event_enum! {
    enum BatchEvent {
        Scheduled,
        MixComplete,
        CureComplete,
    }
}

fn build_machine() -> StateMachine<'static, BatchState, BatchEvent> {
    let table: Vec<Transition<'static, BatchState, BatchEvent>> = vec![
        simple_transition(BatchState::Queued, BatchEvent::Scheduled, BatchState::Mixing),
        simple_transition(BatchState::Mixing, BatchEvent::MixComplete, BatchState::Curing),
        simple_transition(BatchState::Curing, BatchEvent::CureComplete, BatchState::Queued),
    ];

    StateMachineBuilder::new()
        .initial(BatchState::Queued)
        .transitions(table)
        .build()
        .expect("batch table is complete")
}

fn main() {
    println!("=== Checkpoint and Resume ===\n");

    let mut machine = build_machine();
    machine.dispatch(BatchEvent::Scheduled);
    machine.dispatch(BatchEvent::MixComplete);

    println!("machine is now: {}", machine.current_state().name());

    let checkpoint = Checkpoint::capture(&machine);
    let json = checkpoint.to_json().expect("checkpoint serializes");
    println!("captured checkpoint {} ({} bytes of JSON)", checkpoint.id, json.len());

    // Simulate a restart: decode the checkpoint and adopt it on a fresh
    // machine over the same table.
    let decoded = Checkpoint::from_json(&json).expect("checkpoint decodes");
    let mut resumed = build_machine();
    resumed.restore(&decoded).expect("checkpoint validates");

    println!(
        "resumed machine is: {} after {} recorded transitions",
        resumed.current_state().name(),
        resumed.history().records().len()
    );

    resumed.dispatch(BatchEvent::CureComplete);
    println!("next dispatch lands in: {}", resumed.current_state().name());
}
