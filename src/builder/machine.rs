//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Blackboard, StateGraph, StateId, TransitionHistory, DEFAULT_HISTORY_CAPACITY};
use crate::runtime::StateMachine;
use crate::validation::{collect_issues, validate, ValidationStrategy};
use tracing::warn;

#[derive(Debug, Clone)]
enum InitialValue {
    Bool(bool),
    Float(f32),
    Int(i32),
    Trigger,
}

/// Builder for constructing state machines with a fluent API.
///
/// Variables are registered in declaration order when
/// [`build`](Self::build) runs, so a duplicate name surfaces there as
/// [`BuildError::Definition`].
pub struct StateMachineBuilder {
    graph: StateGraph,
    entrypoint: Option<StateId>,
    variables: Vec<(String, InitialValue)>,
    history_capacity: usize,
    validation: ValidationStrategy,
}

impl StateMachineBuilder {
    /// Create a new builder over a wired state graph.
    pub fn new(graph: StateGraph) -> Self {
        Self {
            graph,
            entrypoint: None,
            variables: Vec::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            validation: ValidationStrategy::default(),
        }
    }

    /// Set the entrypoint state (required).
    pub fn entrypoint(mut self, state: StateId) -> Self {
        self.entrypoint = Some(state);
        self
    }

    pub fn bool(self, name: impl Into<String>, initial: bool) -> Self {
        self.variable(name, InitialValue::Bool(initial))
    }

    pub fn float(self, name: impl Into<String>, initial: f32) -> Self {
        self.variable(name, InitialValue::Float(initial))
    }

    pub fn int(self, name: impl Into<String>, initial: i32) -> Self {
        self.variable(name, InitialValue::Int(initial))
    }

    pub fn trigger(self, name: impl Into<String>) -> Self {
        self.variable(name, InitialValue::Trigger)
    }

    /// Bound the transition history. Zero disables recording.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set how definition issues are handled.
    pub fn validation(mut self, strategy: ValidationStrategy) -> Self {
        self.validation = strategy;
        self
    }

    fn variable(mut self, name: impl Into<String>, initial: InitialValue) -> Self {
        self.variables.push((name.into(), initial));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or, under
    /// [`ValidationStrategy::Reject`], if the definition has issues.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let entrypoint = self.entrypoint.ok_or(BuildError::MissingEntrypoint)?;

        let mut blackboard = Blackboard::new();
        for (name, initial) in self.variables {
            match initial {
                InitialValue::Bool(value) => blackboard.register_bool(name, value)?,
                InitialValue::Float(value) => blackboard.register_float(name, value)?,
                InitialValue::Int(value) => blackboard.register_int(name, value)?,
                InitialValue::Trigger => blackboard.register_trigger(name)?,
            }
        }

        if self.validation != ValidationStrategy::Skip {
            let issues = collect_issues(&validate(&self.graph, &blackboard, entrypoint));

            if !issues.is_empty() {
                if self.validation == ValidationStrategy::Reject {
                    return Err(BuildError::InvalidDefinition(issues));
                }
                for issue in &issues {
                    warn!(%issue, "state machine definition issue");
                }
            }
        }

        let history = TransitionHistory::with_capacity(self.history_capacity);
        Ok(StateMachine::from_parts(
            self.graph, blackboard, entrypoint, history,
        )?)
    }
}
