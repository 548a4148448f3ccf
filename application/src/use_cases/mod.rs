//! Use cases
//!
//! The orchestration logic of the tool invocation layer: one use case for
//! catalog tool dispatch and one for chat quick actions.

pub mod invoke_tool;
pub mod run_quick_action;
