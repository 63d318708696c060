//! Traffic Light Machine
//!
//! This example demonstrates a simple cyclic machine driven by a single
//! action.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - The `goto` helper for fixed transitions
//! - Unhandled dispatches as defined no-ops
//!
//! Run with: cargo run --example traffic_light

use reflux::builder::{goto, MachineBuilder};
use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum TrafficLight {
    Red,
    Yellow,
    Green,
}

impl_state_tags! {
    TrafficLight {
        Red => "red",
        Yellow => "yellow",
        Green => "green",
    }
}

#[derive(Clone, Debug)]
enum Signal {
    Tick,
    Pedestrian,
}

impl_action_tags! {
    Signal {
        Tick => "tick",
        Pedestrian => "pedestrian",
    }
}

#[derive(Clone, PartialEq, Debug)]
enum NoEffect {}

impl_effect_tags! { NoEffect {} }

fn main() {
    println!("=== Traffic Light Machine ===\n");

    let mut machine = MachineBuilder::<TrafficLight, Signal, NoEffect>::new()
        .initial(TrafficLight::Red)
        .on("red", "tick", goto(TrafficLight::Green))
        .on("green", "tick", goto(TrafficLight::Yellow))
        .on("yellow", "tick", goto(TrafficLight::Red))
        // Pedestrian requests only matter while the light is green.
        .on("green", "pedestrian", goto(TrafficLight::Yellow))
        .build()
        .unwrap();

    println!("Initial state: {:?}\n", machine.state());

    println!("Ticking through a full cycle:");
    for _ in 0..3 {
        machine.dispatch(Signal::Tick);
        println!("  -> {:?}", machine.state());
    }

    println!("\nPedestrian request at red (no handler, defined no-op):");
    machine.dispatch(Signal::Pedestrian);
    println!("  -> {:?}", machine.state());

    println!("\nPedestrian request at green (cuts the cycle short):");
    machine.dispatch(Signal::Tick);
    machine.dispatch(Signal::Pedestrian);
    println!("  -> {:?}", machine.state());

    println!("\nCommitted transitions: {}", machine.log().records().len());
    println!("\n=== Example Complete ===");
}
