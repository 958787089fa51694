//! Chroma FSM: a deterministic, tick-driven state machine engine
//!
//! A machine has exactly one active state. Transitions between states are
//! guarded by conditions evaluated against a typed blackboard, and fire
//! immediately: a single tick may chain several jumps, and entering the
//! same state twice within one tick is reported as a loop.
//!
//! # Core Concepts
//!
//! - **Blackboard**: Typed variables (bool, float, int, trigger) read by conditions
//! - **Conditions**: Immutable comparisons of one variable against a constant
//! - **States**: Graph nodes owning their transitions, driven by a `StateBehavior`
//! - **Triggers**: One-shot flags consumed by the first jump that uses them
//!
//! # Example
//!
//! ```rust
//! use chroma_fsm::core::{ConditionOperator, StateGraph, StateTransition, TransitionCondition};
//! use chroma_fsm::StateMachine;
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.add_empty_state("Idle");
//! let walking = graph.add_empty_state("Walking");
//! let running = graph.add_empty_state("Running");
//!
//! let faster_than = |threshold| {
//!     vec![TransitionCondition::float("movementSpeed", ConditionOperator::Greater, threshold)]
//! };
//! graph.add_transition(idle, StateTransition::new(walking, faster_than(0.0))).unwrap();
//! graph.add_transition(walking, StateTransition::new(running, faster_than(1.0))).unwrap();
//!
//! let mut machine = StateMachine::new(graph, idle).unwrap();
//! machine.register_float("movementSpeed", 0.0).unwrap();
//! machine.start();
//!
//! // Both jumps happen within the same tick.
//! machine.update_float("movementSpeed", 1.01).unwrap();
//! machine.tick(0.016).unwrap();
//! assert_eq!(machine.current_state_name(), Some("Running"));
//! ```

pub mod builder;
pub mod core;
pub mod runtime;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Blackboard, ConditionOperator, EmptyState, FsmError, StateBehavior, StateGraph, StateId,
    StateTransition, TransitionCondition, VariableKind,
};
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use runtime::StateMachine;
