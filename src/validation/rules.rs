//! Definition checks, accumulated with `Validation`.

use crate::core::{Blackboard, State, StateGraph, StateId};
use crate::validation::issues::DefinitionIssue;
use std::collections::{BTreeSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a machine definition.
pub type DefinitionValidation = Validation<(), NonEmptyVec<DefinitionIssue>>;

/// Check a machine definition, accumulating ALL issues.
///
/// Returns `Validation::Success(())` if the definition is clean, otherwise
/// `Validation::Failure` with every issue found.
pub fn validate(
    graph: &StateGraph,
    blackboard: &Blackboard,
    entrypoint: StateId,
) -> DefinitionValidation {
    if !graph.contains(entrypoint) {
        return Validation::fail(DefinitionIssue::UnknownEntrypoint { id: entrypoint });
    }

    let mut checks: Vec<DefinitionValidation> = Vec::new();

    for state in graph.iter() {
        check_conditions(state, blackboard, &mut checks);
        check_shadowed_transitions(state, &mut checks);
    }
    check_reachability(graph, entrypoint, &mut checks);

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a validation result into the list of issues it carries.
pub fn collect_issues(validation: &DefinitionValidation) -> Vec<DefinitionIssue> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_conditions(
    state: &State,
    blackboard: &Blackboard,
    checks: &mut Vec<DefinitionValidation>,
) {
    let conditions = state
        .transitions()
        .iter()
        .flat_map(|transition| transition.conditions());

    for condition in conditions {
        let check = match blackboard.get_variable(condition.variable()) {
            Err(_) => Validation::fail(DefinitionIssue::UnregisteredVariable {
                state: state.name().to_string(),
                variable: condition.variable().to_string(),
            }),
            Ok(variable) if variable.kind() != condition.kind() => {
                Validation::fail(DefinitionIssue::KindMismatch {
                    state: state.name().to_string(),
                    variable: condition.variable().to_string(),
                    condition_kind: condition.kind(),
                    variable_kind: variable.kind(),
                })
            }
            Ok(_) => Validation::success(()),
        };
        checks.push(check);
    }
}

// First-match-wins: nothing after an unconditional transition is ever taken.
fn check_shadowed_transitions(state: &State, checks: &mut Vec<DefinitionValidation>) {
    let Some(first_unconditional) = state
        .transitions()
        .iter()
        .position(|transition| transition.is_unconditional())
    else {
        return;
    };

    for index in first_unconditional + 1..state.transitions().len() {
        checks.push(Validation::fail(DefinitionIssue::ShadowedTransition {
            state: state.name().to_string(),
            index,
        }));
    }
}

fn check_reachability(
    graph: &StateGraph,
    entrypoint: StateId,
    checks: &mut Vec<DefinitionValidation>,
) {
    let mut reached = BTreeSet::from([entrypoint]);
    let mut queue = VecDeque::from([entrypoint]);

    while let Some(id) = queue.pop_front() {
        for transition in graph.node(id).transitions() {
            if reached.insert(transition.to()) {
                queue.push_back(transition.to());
            }
        }
    }

    for state in graph.iter().filter(|state| !reached.contains(&state.id())) {
        checks.push(Validation::fail(DefinitionIssue::UnreachableState {
            state: state.name().to_string(),
        }));
    }
}
