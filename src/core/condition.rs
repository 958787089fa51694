//! Transition conditions: immutable predicates over one blackboard variable.
//!
//! Conditions are pure. They compare the current value of a variable to a
//! constant and never touch the blackboard beyond reading it.

use super::blackboard::{bool_to_value, Blackboard, VariableKind};
use super::error::FsmError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied between a variable (left) and a constant (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConditionOperator {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
}

impl ConditionOperator {
    pub const ALL: [ConditionOperator; 6] = [
        Self::Greater,
        Self::GreaterEqual,
        Self::Less,
        Self::LessEqual,
        Self::Equal,
        Self::NotEqual,
    ];

    /// Compare `lhs` to `rhs` with plain `f32` semantics (no epsilon).
    pub fn compare(self, lhs: f32, rhs: f32) -> bool {
        match self {
            Self::Greater => lhs > rhs,
            Self::GreaterEqual => lhs >= rhs,
            Self::Less => lhs < rhs,
            Self::LessEqual => lhs <= rhs,
            Self::Equal => lhs == rhs,
            Self::NotEqual => lhs != rhs,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Self::Equal | Self::NotEqual)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Predicate over a single blackboard variable.
///
/// Only the four typed constructors build conditions, so the invariants
/// hold for every value: bool conditions use `Equal`/`NotEqual`, trigger
/// conditions are always `Equal` against 1.0.
///
/// # Example
///
/// ```rust
/// use chroma_fsm::core::{Blackboard, ConditionOperator, TransitionCondition};
///
/// let mut blackboard = Blackboard::new();
/// blackboard.register_float("movementSpeed", 0.5).unwrap();
///
/// let moving = TransitionCondition::float("movementSpeed", ConditionOperator::Greater, 0.0);
/// let running = TransitionCondition::float("movementSpeed", ConditionOperator::Greater, 1.0);
///
/// assert!(moving.is_met(&blackboard).unwrap());
/// assert!(!running.is_met(&blackboard).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionCondition {
    variable: String,
    operator: ConditionOperator,
    right_operand: f32,
    kind: VariableKind,
}

impl TransitionCondition {
    fn new(
        variable: impl Into<String>,
        operator: ConditionOperator,
        right_operand: f32,
        kind: VariableKind,
    ) -> Self {
        Self {
            variable: variable.into(),
            operator,
            right_operand,
            kind,
        }
    }

    /// Bool condition; only `Equal` and `NotEqual` are accepted.
    pub fn bool(
        variable: impl Into<String>,
        operator: ConditionOperator,
        value: bool,
    ) -> Result<Self, FsmError> {
        if !operator.is_equality() {
            return Err(FsmError::InvalidOperatorForType {
                operator,
                kind: VariableKind::Bool,
            });
        }

        Ok(Self::new(
            variable,
            operator,
            bool_to_value(value),
            VariableKind::Bool,
        ))
    }

    pub fn float(variable: impl Into<String>, operator: ConditionOperator, value: f32) -> Self {
        Self::new(variable, operator, value, VariableKind::Float)
    }

    pub fn int(variable: impl Into<String>, operator: ConditionOperator, value: i32) -> Self {
        Self::new(variable, operator, value as f32, VariableKind::Int)
    }

    /// Met while the trigger is active.
    pub fn trigger(variable: impl Into<String>) -> Self {
        Self::new(variable, ConditionOperator::Equal, 1.0, VariableKind::Trigger)
    }

    /// Name of the blackboard variable on the left-hand side.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn operator(&self) -> ConditionOperator {
        self.operator
    }

    pub fn right_operand(&self) -> f32 {
        self.right_operand
    }

    /// Kind the condition was constructed for.
    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Evaluate the condition against the blackboard.
    ///
    /// Fails with [`FsmError::UnknownVariable`] if the variable was never
    /// registered.
    pub fn is_met(&self, blackboard: &Blackboard) -> Result<bool, FsmError> {
        let variable = blackboard.get_variable(&self.variable)?;
        Ok(self.operator.compare(variable.value(), self.right_operand))
    }
}

impl fmt::Display for TransitionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.variable, self.operator, self.right_operand)
    }
}
