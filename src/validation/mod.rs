//! Design-time validation of state machine definitions.
//!
//! Runtime errors fail fast: the first unknown variable or loop aborts the
//! call that hit it. Validation runs over the whole definition before the
//! machine starts and uses Stillwater's `Validation` type to report ALL
//! issues at once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use chroma_fsm::core::{Blackboard, StateGraph};
//! use chroma_fsm::validation::{collect_issues, validate, DefinitionIssue};
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.add_empty_state("Idle");
//! graph.add_empty_state("Unwired");
//!
//! let result = validate(&graph, &Blackboard::new(), idle);
//! assert_eq!(
//!     collect_issues(&result),
//!     vec![DefinitionIssue::UnreachableState { state: "Unwired".to_string() }]
//! );
//! ```

pub mod issues;
pub mod rules;

pub use issues::{DefinitionIssue, ValidationStrategy};
pub use rules::{collect_issues, validate, DefinitionValidation};
