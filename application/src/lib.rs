//! Application layer for juris
//!
//! This crate contains the use cases and port definitions of the tool
//! invocation layer. It depends only on the domain layer; the adapters
//! behind the ports live in the infrastructure crate.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    practice_store::{PracticeStorePort, StoreError},
    thread_audit::ThreadAuditPort,
    tool_endpoint::{ToolEndpointPort, TransportError},
};
pub use use_cases::invoke_tool::InvokeToolUseCase;
pub use use_cases::run_quick_action::{QuickActionError, RunQuickActionUseCase};
