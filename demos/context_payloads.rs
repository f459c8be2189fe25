//! Typed Context Payloads
//!
//! This example demonstrates attaching host-owned, type-tagged payloads to
//! transition rows and retrieving them safely from hooks and from outside
//! a dispatch cycle.
//!
//! Key concepts:
//! - `tagged_context!` declaring a unique tag per payload type
//! - `is::<T>()` / `downcast_ref::<T>()` checked access
//! - Interior mutability for payloads mutated by hooks
//! - `context(from, event, to)` lookup by exact triple
//!
//! Run with: cargo run --example context_payloads

use std::sync::atomic::{AtomicU32, Ordering};
use switchyard::builder::{StateMachineBuilder, TransitionBuilder};
use switchyard::core::ContextTag;
use switchyard::{event_enum, state_enum, tagged_context};

state_enum! {
    enum FillerState {
        Waiting,
        Filling,
        Capping,
    }
}

event_enum! {
    enum FillerEvent {
        BottlePresent,
        LevelReached,
        CapSeated,
    }
}

// Tags come from one closed enumeration so they stay unique.
enum PayloadKind {
    Fill,
    Cap,
}

struct FillPayload {
    dispensed_ml: AtomicU32,
}

tagged_context!(FillPayload, PayloadKind::Fill as ContextTag);

struct CapPayload {
    torque_ncm: AtomicU32,
}

tagged_context!(CapPayload, PayloadKind::Cap as ContextTag);

fn main() {
    println!("=== Typed Context Payloads ===\n");

    // Payloads outlive the machine; the table only borrows them.
    let fill = FillPayload {
        dispensed_ml: AtomicU32::new(0),
    };
    let cap = CapPayload {
        torque_ncm: AtomicU32::new(0),
    };

    let mut machine = StateMachineBuilder::new()
        .initial(FillerState::Waiting)
        .transition(
            TransitionBuilder::new()
                .from(FillerState::Waiting)
                .event(FillerEvent::BottlePresent)
                .to(FillerState::Filling)
                .context(&fill),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(FillerState::Filling)
                .event(FillerEvent::LevelReached)
                .to(FillerState::Capping)
                .on_enter(|_, _, _, context| {
                    // This hook belongs to the Filling state; its row's
                    // payload is the fill payload.
                    if let Some(payload) = context.and_then(|c| c.downcast_ref::<FillPayload>()) {
                        payload.dispensed_ml.store(330, Ordering::Relaxed);
                        println!("  [hook] fill head dispensing, payload is FillPayload");
                    }
                })
                .context(&fill),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from(FillerState::Capping)
                .event(FillerEvent::CapSeated)
                .to(FillerState::Waiting)
                .on_enter(|_, _, _, context| {
                    if let Some(payload) = context.and_then(|c| c.downcast_ref::<CapPayload>()) {
                        payload.torque_ncm.store(120, Ordering::Relaxed);
                        println!("  [hook] capper engaged, payload is CapPayload");
                    }
                })
                .context(&cap),
        )
        .unwrap()
        .build()
        .unwrap();

    println!("dispatching a full bottle cycle:");
    machine.dispatch(FillerEvent::BottlePresent);
    machine.dispatch(FillerEvent::LevelReached);
    machine.dispatch(FillerEvent::CapSeated);

    println!("\npayload values written by hooks:");
    println!("  dispensed: {} ml", fill.dispensed_ml.load(Ordering::Relaxed));
    println!("  cap torque: {} Ncm", cap.torque_ncm.load(Ordering::Relaxed));

    // Outside a dispatch cycle, rows can be queried by exact triple.
    let ctx = machine
        .context(
            &FillerState::Capping,
            &FillerEvent::CapSeated,
            &FillerState::Waiting,
        )
        .expect("capping row has a payload");

    println!("\nlooked up capping row payload:");
    println!("  is CapPayload: {}", ctx.is::<CapPayload>());
    println!("  is FillPayload: {}", ctx.is::<FillPayload>());
}
