//! Fault Recovery with Reset
//!
//! This example demonstrates the `Reset` outcome: a transition hook that
//! detects a fault aborts the transition and returns the machine to its
//! initial state, without the table needing an explicit recovery row from
//! every state.
//!
//! Key concepts:
//! - `on_transition` hooks deciding the outcome
//! - `Reset` rerouting entry to the initial state
//! - Entry hooks shared by every path into a state
//!
//! Run with: cargo run --example fault_recovery

use switchyard::builder::{StateMachineBuilder, TransitionBuilder};
use switchyard::core::State;
use switchyard::engine::TransitionResult;
use switchyard::{event_enum, state_enum};

state_enum! {
    enum OvenState {
        Idle,
        Preheating,
        Baking,
    }
}

event_enum! {
    enum OvenEvent {
        StartRequested,
        TempReached,
        DoorOpened,
    }
}

fn main() {
    println!("=== Fault Recovery State Machine ===\n");

    let mut machine = StateMachineBuilder::new()
        .initial(OvenState::Idle)
        .transition(
            TransitionBuilder::new()
                .from(OvenState::Idle)
                .event(OvenEvent::StartRequested)
                .to(OvenState::Preheating)
                .on_enter(|_, _, _, _| println!("  [hook] entering Idle, heater off"))
                .on_exit(|_, _, _, _| println!("  [hook] leaving Idle")),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(OvenState::Preheating)
                .event(OvenEvent::TempReached)
                .to(OvenState::Baking)
                .on_enter(|_, _, _, _| println!("  [hook] entering Preheating, ramping")),
        )
        .unwrap()
        .transition(
            // Opening the door mid-bake aborts the cycle entirely. The
            // row's target is ignored on Reset.
            TransitionBuilder::new()
                .from(OvenState::Baking)
                .event(OvenEvent::DoorOpened)
                .to(OvenState::Baking)
                .on_transition(|_, _, _, _| {
                    println!("  [hook] door open, aborting bake");
                    TransitionResult::Reset
                }),
        )
        .unwrap()
        .build()
        .unwrap();

    println!("Initial state: {}", machine.current_state().name());

    println!("\ndispatch StartRequested:");
    let result = machine.dispatch(OvenEvent::StartRequested);
    println!("  result {:?}, now {}", result, machine.current_state().name());

    println!("\ndispatch TempReached:");
    let result = machine.dispatch(OvenEvent::TempReached);
    println!("  result {:?}, now {}", result, machine.current_state().name());

    println!("\ndispatch DoorOpened (fault):");
    let result = machine.dispatch(OvenEvent::DoorOpened);
    println!("  result {:?}, now {}", result, machine.current_state().name());

    println!("\nThe Reset outcome entered Idle and ran Idle's entry hook,");
    println!("even though the faulting row's target was Baking.");
}
