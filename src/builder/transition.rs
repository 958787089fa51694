//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{ConditionOperator, FsmError, StateId, StateTransition, TransitionCondition};

/// Builder for constructing transitions with a fluent API.
///
/// Condition errors (a bool condition with an ordering operator) are kept
/// until [`build`](Self::build) so the chain never breaks.
///
/// # Example
///
/// ```rust
/// use chroma_fsm::builder::TransitionBuilder;
/// use chroma_fsm::core::{ConditionOperator, StateGraph};
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_empty_state("Idle");
/// let jumping = graph.add_empty_state("Jumping");
///
/// let transition = TransitionBuilder::new()
///     .to(jumping)
///     .when_bool("isGrounded", ConditionOperator::Equal, true)
///     .on_trigger("jump")
///     .build()
///     .unwrap();
///
/// graph.add_transition(idle, transition).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    to: Option<StateId>,
    conditions: Vec<TransitionCondition>,
    error: Option<FsmError>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: StateId) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a prebuilt condition.
    pub fn when(mut self, condition: TransitionCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn when_bool(
        mut self,
        variable: impl Into<String>,
        operator: ConditionOperator,
        value: bool,
    ) -> Self {
        match TransitionCondition::bool(variable, operator, value) {
            Ok(condition) => self.conditions.push(condition),
            Err(error) => {
                self.error.get_or_insert(error);
            }
        }
        self
    }

    pub fn when_float(
        self,
        variable: impl Into<String>,
        operator: ConditionOperator,
        value: f32,
    ) -> Self {
        self.when(TransitionCondition::float(variable, operator, value))
    }

    pub fn when_int(
        self,
        variable: impl Into<String>,
        operator: ConditionOperator,
        value: i32,
    ) -> Self {
        self.when(TransitionCondition::int(variable, operator, value))
    }

    /// Fire while the trigger is active.
    pub fn on_trigger(self, variable: impl Into<String>) -> Self {
        self.when(TransitionCondition::trigger(variable))
    }

    /// Build the transition.
    pub fn build(self) -> Result<StateTransition, BuildError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        let to = self.to.ok_or(BuildError::MissingTarget)?;

        Ok(StateTransition::new(to, self.conditions))
    }
}
