//! Combat Triggers
//!
//! This example shows one-shot triggers: an attack input moves Idle to
//! Attacking, and a second press is needed to reach Comboing.
//!
//! Key concepts:
//! - Triggers are consumed by the jump that uses them
//! - Unused triggers reset at the end of the tick
//! - Definition validation before the machine runs
//!
//! Run with: RUST_LOG=chroma_fsm=debug cargo run --example combat_triggers

use chroma_fsm::builder::{StateMachineBuilder, TransitionBuilder};
use chroma_fsm::core::{ConditionOperator, StateGraph};
use chroma_fsm::validation::{collect_issues, ValidationStrategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Combat Triggers ===\n");

    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let attacking = graph.add_empty_state("Attacking");
    let comboing = graph.add_empty_state("Comboing");
    let staggered = graph.add_empty_state("Staggered");

    graph.add_transition(
        idle,
        TransitionBuilder::new().to(attacking).on_trigger("attack").build()?,
    )?;
    graph.add_transition(
        attacking,
        TransitionBuilder::new().to(comboing).on_trigger("attack").build()?,
    )?;
    graph.add_transition(
        comboing,
        TransitionBuilder::new()
            .to(idle)
            .when_int("comboHits", ConditionOperator::GreaterEqual, 3)
            .build()?,
    )?;
    // Staggered is never targeted; validation reports it.
    graph.add_transition(staggered, TransitionBuilder::new().to(idle).build()?)?;

    let mut machine = StateMachineBuilder::new(graph)
        .entrypoint(idle)
        .trigger("attack")
        .int("comboHits", 0)
        .validation(ValidationStrategy::WarnAndContinue)
        .build()?;

    println!("Definition issues:");
    for issue in collect_issues(&machine.validate()) {
        println!("  - {issue}");
    }

    machine.start();
    machine.tick(0.016)?;

    println!("\nPress attack once");
    machine.activate_trigger("attack")?;
    machine.tick(0.016)?;
    println!("  current state: {:?}", machine.current_state_name());

    println!("\nIdle frame, nothing pressed");
    machine.tick(0.016)?;
    println!("  current state: {:?}", machine.current_state_name());

    println!("\nPress attack again");
    machine.activate_trigger("attack")?;
    machine.tick(0.016)?;
    println!("  current state: {:?}", machine.current_state_name());

    println!("\nCombo lands three hits");
    machine.update_int("comboHits", 3)?;
    machine.tick(0.016)?;
    println!("  current state: {:?}", machine.current_state_name());

    println!("\nPress attack after the combo");
    machine.activate_trigger("attack")?;
    match machine.tick(0.016) {
        Ok(()) => println!("  current state: {:?}", machine.current_state_name()),
        Err(error) => println!("  tick failed: {error}"),
    }

    Ok(())
}
