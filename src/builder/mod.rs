//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for wiring transitions and
//! assembling a machine with its blackboard, history and validation
//! settings in one place.
//!
//! # Example
//!
//! ```rust
//! use chroma_fsm::builder::{StateMachineBuilder, TransitionBuilder};
//! use chroma_fsm::core::{ConditionOperator, StateGraph};
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.add_empty_state("Idle");
//! let attacking = graph.add_empty_state("Attacking");
//!
//! graph
//!     .add_transition(idle, TransitionBuilder::new().to(attacking).on_trigger("attack").build().unwrap())
//!     .unwrap();
//! graph
//!     .add_transition(
//!         attacking,
//!         TransitionBuilder::new()
//!             .to(idle)
//!             .when_float("stamina", ConditionOperator::LessEqual, 0.0)
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mut machine = StateMachineBuilder::new(graph)
//!     .entrypoint(idle)
//!     .trigger("attack")
//!     .float("stamina", 1.0)
//!     .build()
//!     .unwrap();
//!
//! machine.start();
//! machine.activate_trigger("attack").unwrap();
//! machine.tick(0.016).unwrap();
//! assert_eq!(machine.current_state_name(), Some("Attacking"));
//! ```

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
