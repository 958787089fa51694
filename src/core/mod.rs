//! Core state machine types.
//!
//! This module contains the building blocks the runtime is made of:
//! - The typed blackboard and its variables
//! - Transition conditions and transitions
//! - States, their lifecycle behavior and the graph that owns them
//! - Bounded transition history
//!
//! Everything here is evaluated synchronously on the caller's thread.

mod blackboard;
mod condition;
mod error;
mod graph;
mod history;
mod state;
mod transition;

pub use blackboard::{Blackboard, BlackboardVariable, VariableKind};
pub use condition::{ConditionOperator, TransitionCondition};
pub use error::FsmError;
pub use graph::StateGraph;
pub use history::{TransitionHistory, TransitionRecord, DEFAULT_HISTORY_CAPACITY};
pub use state::{EmptyState, State, StateBehavior, StateId};
pub use transition::StateTransition;
