//! Tool invocation outcome types — the result envelope and error taxonomy
//!
//! Every invocation, whatever happens, resolves to a
//! [`ToolInvocationResult`]. The dispatcher never propagates an error to
//! its caller; the three failure kinds in [`InvocationError`] all collapse
//! into the envelope's `error` string.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::traits::ValidationError;

/// Why an invocation failed.
///
/// The rendered message is what lands in the envelope's `error` field:
///
/// | Variant | Network call made? |
/// |---------|--------------------|
/// | `ToolNotFound` | No |
/// | `Validation` | No |
/// | `Transport` | Attempted |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// Unknown tool id; nothing was evaluated
    #[error("Tool {0} not found")]
    ToolNotFound(String),

    /// The parameter map violated the declared schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network-level failure or non-2xx response, already rendered
    #[error("{0}")]
    Transport(String),
}

/// Uniform outcome of a tool invocation.
///
/// Exactly one of `data` / `error` is populated; the constructors are the
/// only way call sites build one, so the invariant holds everywhere.
/// Serializes with the camelCase field names the web callers consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocationResult {
    pub success: bool,
    /// Opaque payload from the execution service. Present iff success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Plain error message. Present iff not success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock duration of the network round trip. Present whenever a
    /// round trip was attempted, including ones that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    /// Version echoed from the tool definition. Present iff success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
}

impl ToolInvocationResult {
    /// Successful round trip
    pub fn success(data: Value, execution_time_ms: u64, tool_version: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            execution_time_ms: Some(execution_time_ms),
            tool_version: Some(tool_version.into()),
        }
    }

    /// Failure before any network attempt (lookup or validation)
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            execution_time_ms: None,
            tool_version: None,
        }
    }

    /// Failure after a network round trip was attempted
    pub fn failure_after_dispatch(error: impl std::fmt::Display, execution_time_ms: u64) -> Self {
        Self {
            execution_time_ms: Some(execution_time_ms),
            ..Self::failure(error)
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
