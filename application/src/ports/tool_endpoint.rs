//! Tool endpoint port
//!
//! Defines the transport interface to the remote tool execution service.

use async_trait::async_trait;
use juris_domain::tool::entities::{InvocationContext, ToolDefinition};
use serde_json::{Map, Value};
use thiserror::Error;

/// Transport-level failure while dispatching an invocation.
///
/// Both variants are normalized into the result envelope by the dispatcher;
/// neither escapes to callers as a propagated error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Non-2xx response from the execution service
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Network-level failure (connect, DNS, body read)
    #[error("{0}")]
    Request(String),
}

/// Port for dispatching validated invocations to the execution service.
///
/// Implementations own the wire contract: POST to the tool's endpoint with
/// the bearer credential and tool version headers and the body
/// `{"parameters": ..., "context": ...}`. The dispatcher guarantees the
/// invocation passed schema validation before this is called, and forwards
/// `context` untouched.
#[async_trait]
pub trait ToolEndpointPort: Send + Sync {
    /// Send one invocation and return the opaque response payload
    async fn dispatch(
        &self,
        tool: &ToolDefinition,
        parameters: &Map<String, Value>,
        context: Option<&InvocationContext>,
    ) -> Result<Value, TransportError>;
}
