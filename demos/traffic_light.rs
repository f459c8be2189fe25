//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic dispatch table.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Simple state and event enumerations
//! - Table-order dispatch with plain rows
//!
//! Run with: cargo run --example traffic_light

use switchyard::builder::{simple_transition, StateMachineBuilder};
use switchyard::core::State;
use switchyard::{event_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

event_enum! {
    enum TimerEvent {
        Expired,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Each timer expiry advances the cycle; the current state picks the row.
    let mut machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .transitions(vec![
            simple_transition(TrafficLight::Red, TimerEvent::Expired, TrafficLight::Green),
            simple_transition(TrafficLight::Green, TimerEvent::Expired, TrafficLight::Yellow),
            simple_transition(TrafficLight::Yellow, TimerEvent::Expired, TrafficLight::Red),
        ])
        .build()
        .expect("traffic light table is complete");

    println!("Initial state: {}", machine.current_state().name());

    for tick in 1..=6 {
        let result = machine.dispatch(TimerEvent::Expired);
        println!(
            "tick {}: {:?} -> now {}",
            tick,
            result,
            machine.current_state().name()
        );
    }

    println!("\nPath traversed:");
    for state in machine.history().get_path() {
        println!("  {}", state.name());
    }

    println!("\nThis is a cyclic machine - the sequence repeats:");
    println!("  Red -> Green -> Yellow -> Red -> Green -> ...");
}
