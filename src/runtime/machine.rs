//! Tick-driven state machine over a typed blackboard.

use crate::core::{
    Blackboard, FsmError, State, StateGraph, StateId, StateTransition, TransitionHistory,
    TransitionRecord,
};
use crate::validation::{validate, DefinitionValidation};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Runs a [`StateGraph`] one tick at a time.
///
/// Blackboard writes only mark the machine dirty; transitions are resolved
/// on the next [`tick`](Self::tick), so several writes between two ticks
/// are evaluated in a single pass. Within that pass any number of
/// transitions may fire, as long as no state is entered twice.
///
/// # Example
///
/// ```rust
/// use chroma_fsm::core::{ConditionOperator, StateGraph, StateTransition, TransitionCondition};
/// use chroma_fsm::runtime::StateMachine;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_empty_state("Idle");
/// let walking = graph.add_empty_state("Walking");
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
/// let mut machine = StateMachine::new(graph, idle).unwrap();
/// machine.register_float("movementSpeed", 0.0).unwrap();
/// machine.start();
///
/// machine.update_float("movementSpeed", 0.5).unwrap();
/// machine.tick(0.016).unwrap();
/// assert_eq!(machine.current_state_name(), Some("Walking"));
/// ```
#[derive(Debug)]
pub struct StateMachine {
    graph: StateGraph,
    blackboard: Blackboard,
    entrypoint: StateId,
    current: Option<StateId>,
    should_evaluate_transitions: bool,
    tick_count: u64,
    history: TransitionHistory,
}

impl StateMachine {
    /// Create an unstarted machine that will begin in `entrypoint`.
    pub fn new(graph: StateGraph, entrypoint: StateId) -> Result<Self, FsmError> {
        Self::from_parts(
            graph,
            Blackboard::new(),
            entrypoint,
            TransitionHistory::default(),
        )
    }

    pub(crate) fn from_parts(
        graph: StateGraph,
        blackboard: Blackboard,
        entrypoint: StateId,
        history: TransitionHistory,
    ) -> Result<Self, FsmError> {
        graph.state(entrypoint)?;

        Ok(Self {
            graph,
            blackboard,
            entrypoint,
            current: None,
            should_evaluate_transitions: false,
            tick_count: 0,
            history,
        })
    }

    /// Enter the entrypoint and schedule an immediate transition check.
    ///
    /// The initial blackboard may already satisfy an outgoing transition, so
    /// the next tick always evaluates. Starting a running machine restarts
    /// it: the current state is exited before the entrypoint is re-entered.
    pub fn start(&mut self) {
        if let Some(current) = self.current {
            warn!(
                state = self.graph.node(current).name(),
                "restarting a running state machine"
            );
            self.graph.node_mut(current).exit();
        }

        self.current = Some(self.entrypoint);
        self.graph.node_mut(self.entrypoint).enter();
        self.should_evaluate_transitions = true;
        debug!(
            entrypoint = self.graph.node(self.entrypoint).name(),
            "state machine started"
        );
    }

    /// Advance the machine by one frame.
    ///
    /// Ticks the current state, resolves transitions if the blackboard
    /// changed since the last tick, then resets every active trigger.
    ///
    /// Triggers are reset even when resolution fails. A failed resolution
    /// stays pending and is retried on the next tick.
    pub fn tick(&mut self, delta_time: f32) -> Result<(), FsmError> {
        let current = self.current.ok_or(FsmError::NotStarted)?;
        self.tick_count += 1;
        trace!(tick = self.tick_count, delta_time, "tick");

        self.graph.node_mut(current).tick(delta_time);

        let resolved = if self.should_evaluate_transitions {
            self.resolve_transitions(current)
        } else {
            Ok(())
        };
        if resolved.is_ok() {
            self.should_evaluate_transitions = false;
        }

        self.blackboard.clean_triggers();
        resolved
    }

    pub fn register_bool(
        &mut self,
        name: impl Into<String>,
        initial: bool,
    ) -> Result<(), FsmError> {
        self.blackboard.register_bool(name, initial)
    }

    pub fn register_float(
        &mut self,
        name: impl Into<String>,
        initial: f32,
    ) -> Result<(), FsmError> {
        self.blackboard.register_float(name, initial)
    }

    pub fn register_int(&mut self, name: impl Into<String>, initial: i32) -> Result<(), FsmError> {
        self.blackboard.register_int(name, initial)
    }

    pub fn register_trigger(&mut self, name: impl Into<String>) -> Result<(), FsmError> {
        self.blackboard.register_trigger(name)
    }

    pub fn update_bool(&mut self, name: &str, value: bool) -> Result<(), FsmError> {
        self.blackboard.update_bool(name, value)?;
        self.should_evaluate_transitions = true;
        Ok(())
    }

    pub fn update_float(&mut self, name: &str, value: f32) -> Result<(), FsmError> {
        self.blackboard.update_float(name, value)?;
        self.should_evaluate_transitions = true;
        Ok(())
    }

    pub fn update_int(&mut self, name: &str, value: i32) -> Result<(), FsmError> {
        self.blackboard.update_int(name, value)?;
        self.should_evaluate_transitions = true;
        Ok(())
    }

    pub fn activate_trigger(&mut self, name: &str) -> Result<(), FsmError> {
        self.blackboard.activate_trigger(name)?;
        self.should_evaluate_transitions = true;
        Ok(())
    }

    pub fn current_state(&self) -> Option<&State> {
        self.current.map(|id| self.graph.node(id))
    }

    pub fn current_state_id(&self) -> Option<StateId> {
        self.current
    }

    pub fn current_state_name(&self) -> Option<&str> {
        self.current_state().map(State::name)
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    pub fn entrypoint(&self) -> StateId {
        self.entrypoint
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Number of ticks run so far, including a tick that failed.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check the definition against the current blackboard.
    pub fn validate(&self) -> DefinitionValidation {
        validate(&self.graph, &self.blackboard, self.entrypoint)
    }

    // Follow transitions until none fires. Entering a state twice within
    // the same pass means two conditions are satisfiable at once.
    fn resolve_transitions(&mut self, mut current: StateId) -> Result<(), FsmError> {
        let mut visited = BTreeSet::new();

        while let Some(target) = self.next_target(current)? {
            if !visited.insert(target) {
                let state = self.graph.node(target).name().to_string();
                warn!(%state, tick = self.tick_count, "transition loop detected");
                return Err(FsmError::TransitionLoopDetected { state });
            }

            self.change_state(current, target);
            // A trigger is consumed by the jump that used it.
            self.blackboard.clean_triggers();
            current = target;
        }

        debug!(
            tick = self.tick_count,
            jumps = visited.len(),
            state = self.graph.node(current).name(),
            "transition resolution finished"
        );
        Ok(())
    }

    fn next_target(&self, current: StateId) -> Result<Option<StateId>, FsmError> {
        Ok(self
            .graph
            .node(current)
            .evaluate_transitions(&self.blackboard)?
            .map(StateTransition::to))
    }

    fn change_state(&mut self, from: StateId, to: StateId) {
        self.graph.node_mut(from).exit();
        self.graph.node_mut(to).enter();
        self.current = Some(to);
        self.history.record(TransitionRecord {
            from,
            to,
            tick: self.tick_count,
        });

        debug!(
            from = self.graph.node(from).name(),
            to = self.graph.node(to).name(),
            tick = self.tick_count,
            "state changed"
        );
    }
}
