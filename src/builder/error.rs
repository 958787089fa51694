//! Build errors for state machine and transition builders.

use crate::core::FsmError;
use crate::validation::DefinitionIssue;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Entrypoint not specified. Call .entrypoint(state) before .build()")]
    MissingEntrypoint,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTarget,

    #[error(transparent)]
    Definition(#[from] FsmError),

    #[error("State machine definition has {} issue(s)", .0.len())]
    InvalidDefinition(Vec<DefinitionIssue>),
}
