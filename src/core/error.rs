//! Runtime errors raised by the blackboard, the state graph and the machine.

use super::blackboard::VariableKind;
use super::condition::ConditionOperator;
use super::state::StateId;
use thiserror::Error;

/// Contract violations detected while defining or running a state machine.
///
/// None of these are recoverable runtime conditions: they point at a
/// malformed machine definition or a misuse of the API, and are returned
/// at the point of violation without any internal retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    #[error("variable '{name}' already exists in the blackboard")]
    DuplicateVariable { name: String },

    #[error("variable '{name}' does not exist in the blackboard")]
    UnknownVariable { name: String },

    #[error("variable '{name}' used with an incorrect type (expected {expected}, received {received})")]
    TypeMismatch {
        name: String,
        expected: VariableKind,
        received: VariableKind,
    },

    #[error("operator '{operator}' is not valid for {kind} conditions")]
    InvalidOperatorForType {
        operator: ConditionOperator,
        kind: VariableKind,
    },

    #[error("transition of state '{state}' points to itself")]
    SelfLoopTransition { state: String },

    #[error("state '{state}' has been visited twice in a single evaluation tick; check that there are no logical loops in the state machine")]
    TransitionLoopDetected { state: String },

    #[error("state {id} does not exist in the state graph")]
    UnknownState { id: StateId },

    #[error("state machine has not been started. Call .start() before .tick()")]
    NotStarted,
}
