//! Definition issues and how the builder reacts to them.

use crate::core::{StateId, VariableKind};
use thiserror::Error;

/// Authoring problems found by [`validate`](super::validate).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionIssue {
    #[error("entrypoint {id} does not exist in the state graph")]
    UnknownEntrypoint { id: StateId },

    #[error("state '{state}' has a condition on unregistered variable '{variable}'")]
    UnregisteredVariable { state: String, variable: String },

    #[error("state '{state}' compares '{variable}' as {condition_kind} but it is registered as {variable_kind}")]
    KindMismatch {
        state: String,
        variable: String,
        condition_kind: VariableKind,
        variable_kind: VariableKind,
    },

    #[error("state '{state}' is unreachable from the entrypoint")]
    UnreachableState { state: String },

    #[error("transition {index} of state '{state}' follows an unconditional transition and can never fire")]
    ShadowedTransition { state: String, index: usize },
}

/// What the builder does when validation reports issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationStrategy {
    /// Refuse to build the machine
    #[default]
    Reject,

    /// Build anyway but log every issue
    WarnAndContinue,

    /// Do not validate
    Skip,
}
