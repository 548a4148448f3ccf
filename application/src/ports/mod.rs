//! Port definitions
//!
//! Interfaces the application layer needs from the outside world. The
//! concrete adapters live in the infrastructure layer and are injected at
//! wiring time.

pub mod practice_store;
pub mod thread_audit;
pub mod tool_endpoint;
