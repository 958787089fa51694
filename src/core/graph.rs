//! Arena owning every state of a machine.
//!
//! States own their transitions and transitions refer to destinations by
//! [`StateId`], so the graph holds no reference cycles.

use super::error::FsmError;
use super::state::{EmptyState, State, StateBehavior, StateId};
use super::transition::StateTransition;

/// Owned collection of states addressed by [`StateId`].
///
/// # Example
///
/// ```rust
/// use chroma_fsm::core::{ConditionOperator, StateGraph, StateTransition, TransitionCondition};
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_empty_state("Idle");
/// let walking = graph.add_empty_state("Walking");
///
/// graph
///     .add_transition(
///         idle,
///         StateTransition::new(
///             walking,
///             vec![TransitionCondition::float("movementSpeed", ConditionOperator::Greater, 0.0)],
///         ),
///     )
///     .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.find("Walking"), Some(walking));
/// ```
#[derive(Debug, Default)]
pub struct StateGraph {
    states: Vec<State>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state driven by `behavior` and return its handle.
    pub fn add_state(
        &mut self,
        name: impl Into<String>,
        behavior: impl StateBehavior + 'static,
    ) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(State::new(id, name.into(), Box::new(behavior)));
        id
    }

    /// Add a state with no lifecycle behavior.
    pub fn add_empty_state(&mut self, name: impl Into<String>) -> StateId {
        self.add_state(name, EmptyState)
    }

    /// Wire `transition` onto the state `from`.
    ///
    /// Both ends must belong to this graph; a transition pointing back to
    /// `from` fails with [`FsmError::SelfLoopTransition`].
    pub fn add_transition(
        &mut self,
        from: StateId,
        transition: StateTransition,
    ) -> Result<(), FsmError> {
        if !self.contains(transition.to()) {
            return Err(FsmError::UnknownState {
                id: transition.to(),
            });
        }

        self.states
            .get_mut(from.index())
            .ok_or(FsmError::UnknownState { id: from })?
            .add_transition(transition)
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.states.len()
    }

    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    /// Like [`get`](Self::get), failing with [`FsmError::UnknownState`].
    pub fn state(&self, id: StateId) -> Result<&State, FsmError> {
        self.get(id).ok_or(FsmError::UnknownState { id })
    }

    /// First state with the given name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .find(|state| state.name() == name)
            .map(State::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    // Ids handed to these come from validated transitions or a validated
    // entrypoint, so indexing stays in bounds.
    pub(crate) fn node(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }
}
