//! Edges between states, gated by an ordered list of conditions.

use super::blackboard::Blackboard;
use super::condition::TransitionCondition;
use super::error::FsmError;
use super::state::StateId;

/// Transition to a destination state.
///
/// All conditions must hold (logical AND, evaluated left to right). An
/// empty condition list always fires.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransition {
    to: StateId,
    conditions: Vec<TransitionCondition>,
}

impl StateTransition {
    pub fn new(to: StateId, conditions: Vec<TransitionCondition>) -> Self {
        Self { to, conditions }
    }

    /// Unconditional transition.
    pub fn always(to: StateId) -> Self {
        Self::new(to, Vec::new())
    }

    /// Destination state.
    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn conditions(&self) -> &[TransitionCondition] {
        &self.conditions
    }

    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check every condition, stopping at the first one that fails.
    pub fn are_conditions_met(&self, blackboard: &Blackboard) -> Result<bool, FsmError> {
        for condition in &self.conditions {
            if !condition.is_met(blackboard)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
