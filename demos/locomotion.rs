//! Locomotion State Machine
//!
//! This example drives an Idle / Walking / Running machine from a single
//! float variable, the way a character controller would each frame.
//!
//! Key concepts:
//! - Float conditions on a shared blackboard
//! - Several jumps resolved within one tick
//! - Transition history for inspecting what happened
//!
//! Run with: RUST_LOG=chroma_fsm=debug cargo run --example locomotion

use chroma_fsm::builder::{StateMachineBuilder, TransitionBuilder};
use chroma_fsm::core::{ConditionOperator, StateBehavior, StateGraph};
use tracing_subscriber::EnvFilter;

const SPEED: &str = "movementSpeed";

struct Announce(&'static str);

impl StateBehavior for Announce {
    fn on_enter(&mut self) {
        println!("  -> entered {}", self.0);
    }

    fn on_exit(&mut self) {
        println!("  <- left {}", self.0);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Locomotion State Machine ===\n");

    let mut graph = StateGraph::new();
    let idle = graph.add_state("Idle", Announce("Idle"));
    let walking = graph.add_state("Walking", Announce("Walking"));
    let running = graph.add_state("Running", Announce("Running"));

    let edges = [
        (idle, walking, ConditionOperator::Greater, 0.0),
        (walking, running, ConditionOperator::Greater, 1.0),
        (running, walking, ConditionOperator::LessEqual, 1.0),
        (walking, idle, ConditionOperator::Equal, 0.0),
    ];
    for (from, to, operator, threshold) in edges {
        let transition = TransitionBuilder::new()
            .to(to)
            .when_float(SPEED, operator, threshold)
            .build()?;
        graph.add_transition(from, transition)?;
    }

    let mut machine = StateMachineBuilder::new(graph)
        .entrypoint(idle)
        .float(SPEED, 0.0)
        .build()?;

    println!("Starting machine");
    machine.start();
    machine.tick(0.016)?;

    for speed in [0.5, 1.01, 1.0, 0.0, 2.5, 0.0] {
        println!("\n{SPEED} = {speed}");
        machine.update_float(SPEED, speed)?;
        machine.tick(0.016)?;
        println!(
            "  current state: {}",
            machine.current_state_name().unwrap_or("<none>")
        );
    }

    println!("\n=== Transition History ===");
    for record in machine.history().records() {
        let from = machine.graph().state(record.from)?.name();
        let to = machine.graph().state(record.to)?.name();
        println!("  tick {:>2}: {from} -> {to}", record.tick);
    }

    Ok(())
}
