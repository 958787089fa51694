//! The machine that drives a state graph.
//!
//! Execution is single-threaded and cooperative: the host calls
//! [`StateMachine::tick`] from its per-frame update and writes blackboard
//! values between ticks. Nothing blocks, suspends or spawns.

mod machine;

pub use machine::StateMachine;
