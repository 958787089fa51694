//! States and their lifecycle behavior.
//!
//! A [`State`] is a named node in a [`StateGraph`](super::StateGraph) that
//! owns its outgoing transitions. What the state *does* while active is
//! supplied by a [`StateBehavior`] implementation.

use super::blackboard::Blackboard;
use super::error::FsmError;
use super::transition::StateTransition;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a state inside its graph.
///
/// Handles compare by identity: two states with the same name still have
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle hooks invoked by the owning machine.
///
/// All methods default to no-ops, so an implementation only overrides what
/// it needs. Hooks have no access to the machine: blackboard writes happen
/// between ticks, never in the middle of a resolution pass.
///
/// # Example
///
/// ```rust
/// use chroma_fsm::core::StateBehavior;
///
/// #[derive(Default)]
/// struct Cooldown {
///     remaining: f32,
/// }
///
/// impl StateBehavior for Cooldown {
///     fn on_enter(&mut self) {
///         self.remaining = 1.5;
///     }
///
///     fn tick(&mut self, delta_time: f32) {
///         self.remaining = (self.remaining - delta_time).max(0.0);
///     }
/// }
/// ```
pub trait StateBehavior {
    /// Executed each time the state is entered.
    fn on_enter(&mut self) {}

    /// Executed each time the state is exited.
    fn on_exit(&mut self) {}

    /// Executed on every machine tick while the state is current.
    fn tick(&mut self, _delta_time: f32) {}
}

/// Behavior that does nothing. Used for placeholder nodes and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyState;

impl StateBehavior for EmptyState {}

/// A node of the state graph.
pub struct State {
    id: StateId,
    name: String,
    behavior: Box<dyn StateBehavior>,
    transitions: Vec<StateTransition>,
}

impl State {
    pub(crate) fn new(id: StateId, name: String, behavior: Box<dyn StateBehavior>) -> Self {
        Self {
            id,
            name,
            behavior,
            transitions: Vec::new(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    /// Name used for diagnostics. Not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing transitions in priority order.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Append a transition; earlier transitions win ties.
    ///
    /// Fails with [`FsmError::SelfLoopTransition`] if the transition points
    /// back to this state.
    pub fn add_transition(&mut self, transition: StateTransition) -> Result<(), FsmError> {
        if transition.to() == self.id {
            return Err(FsmError::SelfLoopTransition {
                state: self.name.clone(),
            });
        }

        self.transitions.push(transition);
        Ok(())
    }

    /// First transition whose conditions are all met, if any.
    pub fn evaluate_transitions(
        &self,
        blackboard: &Blackboard,
    ) -> Result<Option<&StateTransition>, FsmError> {
        for transition in &self.transitions {
            if transition.are_conditions_met(blackboard)? {
                return Ok(Some(transition));
            }
        }
        Ok(None)
    }

    pub(crate) fn enter(&mut self) {
        self.behavior.on_enter();
    }

    pub(crate) fn exit(&mut self) {
        self.behavior.on_exit();
    }

    pub(crate) fn tick(&mut self, delta_time: f32) {
        self.behavior.tick(delta_time);
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
