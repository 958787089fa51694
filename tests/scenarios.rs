//! End-to-end machine scenarios driven through the public API.

use chroma_fsm::builder::{StateMachineBuilder, TransitionBuilder};
use chroma_fsm::core::{
    ConditionOperator, FsmError, StateBehavior, StateGraph, StateId, StateTransition,
    TransitionCondition,
};
use chroma_fsm::validation::ValidationStrategy;
use chroma_fsm::StateMachine;
use std::cell::RefCell;
use std::rc::Rc;

const MOVEMENT_SPEED: &str = "movementSpeed";
const DELTA: f32 = 0.01;

struct Locomotion {
    machine: StateMachine,
    idle: StateId,
    walking: StateId,
    running: StateId,
}

fn speed(operator: ConditionOperator, value: f32) -> Vec<TransitionCondition> {
    vec![TransitionCondition::float(MOVEMENT_SPEED, operator, value)]
}

/// Idle -> Walking -> Running wired on `movementSpeed`, plus the two ways back.
fn locomotion_graph() -> (StateGraph, StateId, StateId, StateId) {
    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let walking = graph.add_empty_state("Walking");
    let running = graph.add_empty_state("Running");

    graph
        .add_transition(
            idle,
            StateTransition::new(walking, speed(ConditionOperator::Greater, 0.0)),
        )
        .unwrap();
    graph
        .add_transition(
            walking,
            StateTransition::new(running, speed(ConditionOperator::Greater, 1.0)),
        )
        .unwrap();
    graph
        .add_transition(
            running,
            StateTransition::new(walking, speed(ConditionOperator::LessEqual, 1.0)),
        )
        .unwrap();
    graph
        .add_transition(
            walking,
            StateTransition::new(idle, speed(ConditionOperator::Equal, 0.0)),
        )
        .unwrap();

    (graph, idle, walking, running)
}

fn locomotion() -> Locomotion {
    let (graph, idle, walking, running) = locomotion_graph();
    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_float(MOVEMENT_SPEED, 0.0).unwrap();

    Locomotion {
        machine,
        idle,
        walking,
        running,
    }
}

#[test]
fn start_sets_current_state_to_entrypoint() {
    let Locomotion { mut machine, idle, .. } = locomotion();

    machine.start();

    assert_eq!(machine.current_state_id(), Some(idle));
    assert_eq!(machine.current_state_name(), Some("Idle"));
}

#[test]
fn tick_changes_states_one_step_at_a_time() {
    let Locomotion {
        mut machine,
        idle,
        walking,
        running,
    } = locomotion();
    machine.start();

    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));

    machine.update_float(MOVEMENT_SPEED, 0.5).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(walking));

    machine.update_float(MOVEMENT_SPEED, 1.01).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(running));

    machine.update_float(MOVEMENT_SPEED, 1.0).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(walking));

    machine.update_float(MOVEMENT_SPEED, 0.0).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));
}

#[test]
fn tick_changes_multiple_states_in_one_tick() {
    let Locomotion {
        mut machine,
        idle,
        walking,
        running,
    } = locomotion();
    machine.start();
    machine.tick(DELTA).unwrap();

    machine.update_float(MOVEMENT_SPEED, 1.01).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(running));
    assert_eq!(machine.history().path(), [idle, walking, running]);

    machine.update_float(MOVEMENT_SPEED, 0.0).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));
    assert_eq!(machine.history().in_tick(machine.tick_count()).count(), 2);
}

#[test]
fn start_evaluates_initial_blackboard() {
    let (graph, idle, _, running) = locomotion_graph();
    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_float(MOVEMENT_SPEED, 3.0).unwrap();

    machine.start();
    machine.tick(DELTA).unwrap();

    assert_eq!(machine.current_state_id(), Some(running));
}

#[test]
fn tick_changes_states_for_bool_conditions() {
    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let jumping = graph.add_empty_state("Jumping");
    graph
        .add_transition(
            idle,
            StateTransition::new(
                jumping,
                vec![
                    TransitionCondition::bool("isGrounded", ConditionOperator::NotEqual, true)
                        .unwrap(),
                ],
            ),
        )
        .unwrap();
    graph
        .add_transition(
            jumping,
            StateTransition::new(
                idle,
                vec![TransitionCondition::bool("isGrounded", ConditionOperator::Equal, true)
                    .unwrap()],
            ),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_bool("isGrounded", true).unwrap();
    machine.start();

    machine.update_bool("isGrounded", false).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(jumping));

    machine.update_bool("isGrounded", true).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));
}

#[test]
fn tick_changes_states_for_int_conditions() {
    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let charging = graph.add_empty_state("Charging");
    graph
        .add_transition(
            idle,
            StateTransition::new(
                charging,
                vec![TransitionCondition::int("chargeLevel", ConditionOperator::Greater, 0)],
            ),
        )
        .unwrap();
    graph
        .add_transition(
            charging,
            StateTransition::new(
                idle,
                vec![TransitionCondition::int("chargeLevel", ConditionOperator::Equal, 0)],
            ),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_int("chargeLevel", 0).unwrap();
    machine.start();

    machine.update_int("chargeLevel", 1).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(charging));

    machine.update_int("chargeLevel", 0).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));
}

fn attack_graph() -> (StateGraph, StateId, StateId, StateId) {
    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let attacking = graph.add_empty_state("Attacking");
    let comboing = graph.add_empty_state("Comboing");

    graph
        .add_transition(
            idle,
            StateTransition::new(attacking, vec![TransitionCondition::trigger("attack")]),
        )
        .unwrap();
    graph
        .add_transition(
            attacking,
            StateTransition::new(comboing, vec![TransitionCondition::trigger("attack")]),
        )
        .unwrap();

    (graph, idle, attacking, comboing)
}

#[test]
fn trigger_is_consumed_by_a_single_jump() {
    let (graph, idle, attacking, comboing) = attack_graph();
    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_trigger("attack").unwrap();
    machine.start();

    machine.activate_trigger("attack").unwrap();
    machine.tick(DELTA).unwrap();

    assert_eq!(machine.current_state_id(), Some(attacking));
    assert_ne!(machine.current_state_id(), Some(comboing));
    assert_eq!(machine.blackboard().get_variable("attack").unwrap().value(), 0.0);

    machine.activate_trigger("attack").unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(comboing));
}

#[test]
fn unconsumed_trigger_resets_at_end_of_tick() {
    let (graph, idle, _, _) = attack_graph();
    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_trigger("attack").unwrap();
    machine.register_trigger("dodge").unwrap();
    machine.start();

    machine.activate_trigger("dodge").unwrap();
    machine.tick(DELTA).unwrap();

    assert_eq!(machine.current_state_id(), Some(idle));
    assert_eq!(machine.blackboard().get_variable("dodge").unwrap().value(), 0.0);
    assert_eq!(machine.blackboard().active_triggers().count(), 0);
}

#[test]
fn level_conditions_survive_chained_jumps() {
    let mut graph = StateGraph::new();
    let idle = graph.add_empty_state("Idle");
    let aiming = graph.add_empty_state("Aiming");
    let firing = graph.add_empty_state("Firing");
    let reloading = graph.add_empty_state("Reloading");

    graph
        .add_transition(
            idle,
            TransitionBuilder::new()
                .to(aiming)
                .on_trigger("fire")
                .build()
                .unwrap(),
        )
        .unwrap();
    graph
        .add_transition(
            aiming,
            TransitionBuilder::new()
                .to(firing)
                .when_int("ammo", ConditionOperator::Greater, 0)
                .build()
                .unwrap(),
        )
        .unwrap();
    graph
        .add_transition(
            firing,
            TransitionBuilder::new()
                .to(reloading)
                .when_bool("magazineEmpty", ConditionOperator::Equal, true)
                .build()
                .unwrap(),
        )
        .unwrap();

    let mut machine = StateMachineBuilder::new(graph)
        .entrypoint(idle)
        .trigger("fire")
        .int("ammo", 3)
        .bool("magazineEmpty", true)
        .build()
        .unwrap();
    machine.start();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(idle));

    machine.activate_trigger("fire").unwrap();
    machine.tick(DELTA).unwrap();

    assert_eq!(machine.current_state_id(), Some(reloading));
}

#[test]
fn tick_detects_loops_in_evaluated_states() {
    let mut graph = StateGraph::new();
    let a = graph.add_empty_state("A");
    let b = graph.add_empty_state("B");
    graph
        .add_transition(
            a,
            StateTransition::new(
                b,
                vec![TransitionCondition::float("speed", ConditionOperator::Greater, 0.0)],
            ),
        )
        .unwrap();
    graph
        .add_transition(
            b,
            StateTransition::new(
                a,
                vec![TransitionCondition::float("speed", ConditionOperator::Less, 0.3)],
            ),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, a).unwrap();
    machine.register_float("speed", 0.0).unwrap();
    machine.start();

    machine.update_float("speed", 0.2).unwrap();
    let result = machine.tick(DELTA);

    assert!(matches!(
        result,
        Err(FsmError::TransitionLoopDetected { .. })
    ));
}

#[test]
fn locomotion_loop_is_detected() {
    let (mut graph, idle, walking, _) = locomotion_graph();
    // Overlaps Idle -> Walking for speeds in (0, 0.3).
    graph
        .add_transition(
            walking,
            StateTransition::new(idle, speed(ConditionOperator::Less, 0.3)),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_float(MOVEMENT_SPEED, 0.0).unwrap();
    machine.start();
    machine.tick(DELTA).unwrap();
    machine.update_float(MOVEMENT_SPEED, 0.2).unwrap();

    assert_eq!(
        machine.tick(DELTA),
        Err(FsmError::TransitionLoopDetected {
            state: "Walking".to_string()
        })
    );
}

#[test]
fn loop_error_repeats_until_blackboard_changes() {
    let (mut graph, idle, walking, _) = locomotion_graph();
    graph
        .add_transition(
            walking,
            StateTransition::new(idle, speed(ConditionOperator::Less, 0.3)),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_float(MOVEMENT_SPEED, 0.2).unwrap();
    machine.start();

    assert!(machine.tick(DELTA).is_err());
    // Resolution is still pending, so the next tick hits the same loop.
    assert!(machine.tick(DELTA).is_err());

    machine.update_float(MOVEMENT_SPEED, 0.5).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(walking));
}

#[test]
fn idle_ticks_never_change_state() {
    let Locomotion {
        mut machine,
        walking,
        ..
    } = locomotion();
    machine.start();
    machine.update_float(MOVEMENT_SPEED, 0.5).unwrap();
    machine.tick(DELTA).unwrap();
    assert_eq!(machine.current_state_id(), Some(walking));

    let recorded = machine.history().len();
    for _ in 0..10 {
        machine.tick(DELTA).unwrap();
        assert_eq!(machine.current_state_id(), Some(walking));
    }
    assert_eq!(machine.history().len(), recorded);
}

#[test]
fn unknown_variable_in_condition_fails_the_tick() {
    let (graph, idle, _, _) = locomotion_graph();
    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.start();

    assert_eq!(
        machine.tick(DELTA),
        Err(FsmError::UnknownVariable {
            name: MOVEMENT_SPEED.to_string()
        })
    );
}

#[test]
fn builder_rejects_definition_with_issues() {
    let (graph, idle, _, _) = locomotion_graph();

    let rejected = StateMachineBuilder::new(graph).entrypoint(idle).int(MOVEMENT_SPEED, 0).build();
    assert!(rejected.is_err());

    let (graph, idle, _, _) = locomotion_graph();
    let accepted = StateMachineBuilder::new(graph)
        .entrypoint(idle)
        .int(MOVEMENT_SPEED, 0)
        .validation(ValidationStrategy::WarnAndContinue)
        .build()
        .unwrap();
    assert!(accepted.validate().is_failure());
}

#[derive(Clone)]
struct Timer {
    elapsed: Rc<RefCell<f32>>,
}

impl StateBehavior for Timer {
    fn on_enter(&mut self) {
        *self.elapsed.borrow_mut() = 0.0;
    }

    fn tick(&mut self, delta_time: f32) {
        *self.elapsed.borrow_mut() += delta_time;
    }
}

#[test]
fn only_the_current_state_is_ticked() {
    let idle_time = Rc::new(RefCell::new(0.0));
    let walk_time = Rc::new(RefCell::new(0.0));

    let mut graph = StateGraph::new();
    let idle = graph.add_state(
        "Idle",
        Timer {
            elapsed: Rc::clone(&idle_time),
        },
    );
    let walking = graph.add_state(
        "Walking",
        Timer {
            elapsed: Rc::clone(&walk_time),
        },
    );
    graph
        .add_transition(
            idle,
            StateTransition::new(walking, speed(ConditionOperator::Greater, 0.0)),
        )
        .unwrap();

    let mut machine = StateMachine::new(graph, idle).unwrap();
    machine.register_float(MOVEMENT_SPEED, 0.0).unwrap();
    machine.start();
    machine.tick(0.25).unwrap();
    machine.tick(0.25).unwrap();
    assert_eq!(*idle_time.borrow(), 0.5);

    machine.update_float(MOVEMENT_SPEED, 1.0).unwrap();
    // Idle is ticked first, then the machine jumps to Walking.
    machine.tick(0.25).unwrap();
    assert_eq!(*idle_time.borrow(), 0.75);
    assert_eq!(*walk_time.borrow(), 0.0);

    machine.tick(0.5).unwrap();
    assert_eq!(*walk_time.borrow(), 0.5);
}
