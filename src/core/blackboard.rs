//! Typed shared memory read by transition conditions.
//!
//! Every variable stores a single `f32`, whatever its kind. The kind tag
//! only exists to reject cross-kind misuse: a bool compared against a float
//! threshold would "work" numerically, so it is refused instead.

use super::error::FsmError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::trace;

/// Logical kind of a blackboard variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VariableKind {
    Bool,
    Float,
    Int,
    /// One-shot flag, reset after being consumed or at the end of a tick.
    Trigger,
}

impl VariableKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Trigger => "Trigger",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts a boolean to its stored representation (1.0 or 0.0).
pub(crate) fn bool_to_value(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// A single named, typed memory cell.
///
/// Bool and Trigger cells always hold exactly 0.0 or 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BlackboardVariable {
    kind: VariableKind,
    value: f32,
}

impl BlackboardVariable {
    pub(crate) fn new(kind: VariableKind, value: f32) -> Self {
        Self { kind, value }
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Raw stored value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value read as a boolean (non-zero is `true`).
    pub fn as_bool(&self) -> bool {
        self.value != 0.0
    }

    /// Value read back as an integer.
    pub fn as_int(&self) -> i32 {
        self.value as i32
    }
}

/// Owned mapping from variable name to typed cell.
///
/// # Example
///
/// ```rust
/// use chroma_fsm::core::{Blackboard, VariableKind};
///
/// let mut blackboard = Blackboard::new();
/// blackboard.register_bool("isGrounded", true).unwrap();
/// blackboard.register_trigger("jump").unwrap();
///
/// blackboard.activate_trigger("jump").unwrap();
/// assert_eq!(blackboard.get_variable("jump").unwrap().value(), 1.0);
///
/// blackboard.clean_triggers();
/// assert_eq!(blackboard.get_variable("jump").unwrap().value(), 0.0);
/// assert_eq!(
///     blackboard.get_variable("isGrounded").unwrap().kind(),
///     VariableKind::Bool
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    variables: BTreeMap<String, BlackboardVariable>,
    active_triggers: BTreeSet<String>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_bool(
        &mut self,
        name: impl Into<String>,
        initial: bool,
    ) -> Result<(), FsmError> {
        self.register(name.into(), VariableKind::Bool, bool_to_value(initial))
    }

    pub fn register_float(
        &mut self,
        name: impl Into<String>,
        initial: f32,
    ) -> Result<(), FsmError> {
        self.register(name.into(), VariableKind::Float, initial)
    }

    pub fn register_int(&mut self, name: impl Into<String>, initial: i32) -> Result<(), FsmError> {
        self.register(name.into(), VariableKind::Int, initial as f32)
    }

    /// Triggers always start inactive.
    pub fn register_trigger(&mut self, name: impl Into<String>) -> Result<(), FsmError> {
        self.register(name.into(), VariableKind::Trigger, 0.0)
    }

    fn register(&mut self, name: String, kind: VariableKind, value: f32) -> Result<(), FsmError> {
        if self.variables.contains_key(&name) {
            return Err(FsmError::DuplicateVariable { name });
        }

        trace!(variable = %name, %kind, value, "registered blackboard variable");
        self.variables.insert(name, BlackboardVariable::new(kind, value));
        Ok(())
    }

    pub fn update_bool(&mut self, name: &str, value: bool) -> Result<(), FsmError> {
        self.variable_mut(name, VariableKind::Bool)?.value = bool_to_value(value);
        Ok(())
    }

    pub fn update_float(&mut self, name: &str, value: f32) -> Result<(), FsmError> {
        self.variable_mut(name, VariableKind::Float)?.value = value;
        Ok(())
    }

    pub fn update_int(&mut self, name: &str, value: i32) -> Result<(), FsmError> {
        self.variable_mut(name, VariableKind::Int)?.value = value as f32;
        Ok(())
    }

    /// Set a trigger to 1.0 and remember it for the next [`clean_triggers`](Self::clean_triggers).
    ///
    /// Activating an already active trigger only re-sets its value.
    pub fn activate_trigger(&mut self, name: &str) -> Result<(), FsmError> {
        self.variable_mut(name, VariableKind::Trigger)?.value = 1.0;
        if self.active_triggers.insert(name.to_string()) {
            trace!(trigger = name, "activated trigger");
        }
        Ok(())
    }

    pub fn get_variable(&self, name: &str) -> Result<BlackboardVariable, FsmError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| FsmError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Reset every active trigger to 0.0 and forget them.
    ///
    /// A no-op when nothing is active.
    pub fn clean_triggers(&mut self) {
        if self.active_triggers.is_empty() {
            return;
        }

        for name in std::mem::take(&mut self.active_triggers) {
            if let Some(variable) = self.variables.get_mut(&name) {
                variable.value = 0.0;
            }
            trace!(trigger = %name, "reset trigger");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variables, sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, BlackboardVariable)> + '_ {
        self.variables
            .iter()
            .map(|(name, variable)| (name.as_str(), *variable))
    }

    /// Names of the triggers awaiting reset.
    pub fn active_triggers(&self) -> impl Iterator<Item = &str> + '_ {
        self.active_triggers.iter().map(String::as_str)
    }

    fn variable_mut(
        &mut self,
        name: &str,
        kind: VariableKind,
    ) -> Result<&mut BlackboardVariable, FsmError> {
        let variable = self
            .variables
            .get_mut(name)
            .ok_or_else(|| FsmError::UnknownVariable {
                name: name.to_string(),
            })?;

        if variable.kind != kind {
            return Err(FsmError::TypeMismatch {
                name: name.to_string(),
                expected: variable.kind,
                received: kind,
            });
        }

        Ok(variable)
    }
}
