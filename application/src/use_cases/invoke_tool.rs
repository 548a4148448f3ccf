//! Invoke tool use case — the dispatcher
//!
//! Normalizes every outcome of a tool invocation into a
//! [`ToolInvocationResult`]: catalog lookup, schema validation, dispatch,
//! and transport failures all land in the same envelope.
//! [`execute`](InvokeToolUseCase::execute) is total; callers never wrap it
//! in error handling.
//!
//! # Invocation Lifecycle
//!
//! ```text
//! IDLE → VALIDATING ─┬─ INVALID → FAILED        (no network attempt)
//!                    └─ VALID → DISPATCHING ─┬─ SUCCESS
//!                                            └─ FAILED
//! ```
//!
//! There is no retry and no timeout on the dispatch leg; a timeout added
//! later must surface as a transport error in the envelope, never as a
//! hang-hiding retry.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use juris_domain::tool::{
    catalog::ToolCatalog,
    entities::ToolInvocation,
    traits::{ParameterValidator, SchemaValidator},
    value_objects::{InvocationError, ToolInvocationResult},
};

use crate::ports::tool_endpoint::ToolEndpointPort;

/// Use case that validates and dispatches tool invocations.
///
/// Holds the read-only catalog and the transport port; both are shared and
/// require no locking, so any number of invocations may run concurrently.
pub struct InvokeToolUseCase {
    catalog: Arc<ToolCatalog>,
    endpoint: Arc<dyn ToolEndpointPort>,
}

impl InvokeToolUseCase {
    pub fn new(catalog: Arc<ToolCatalog>, endpoint: Arc<dyn ToolEndpointPort>) -> Self {
        Self { catalog, endpoint }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Validate and dispatch one invocation.
    ///
    /// A request that fails lookup or validation never reaches the network.
    /// Every branch returns a well-formed envelope; nothing propagates as
    /// an error to the caller.
    pub async fn execute(&self, invocation: &ToolInvocation) -> ToolInvocationResult {
        let Some(tool) = self.catalog.get(&invocation.tool_id) else {
            warn!(tool = %invocation.tool_id, "Unknown tool id");
            return ToolInvocationResult::failure(InvocationError::ToolNotFound(
                invocation.tool_id.clone(),
            ));
        };

        if let Err(e) = SchemaValidator.validate(tool, &invocation.parameters) {
            warn!(tool = %tool.id, error = %e, "Invocation rejected by validation");
            return ToolInvocationResult::failure(InvocationError::Validation(e));
        }

        debug!(
            tool = %tool.id,
            endpoint = %tool.endpoint,
            version = %tool.version,
            "Dispatching invocation"
        );

        let start = Instant::now();
        match self
            .endpoint
            .dispatch(tool, &invocation.parameters, invocation.context.as_ref())
            .await
        {
            Ok(data) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                debug!(tool = %tool.id, elapsed_ms, "Invocation succeeded");
                ToolInvocationResult::success(data, elapsed_ms, &tool.version)
            }
            Err(e) => {
                let elapsed_ms = start.elapsed().as_millis() as u64;
                warn!(tool = %tool.id, elapsed_ms, error = %e, "Invocation failed");
                ToolInvocationResult::failure_after_dispatch(
                    InvocationError::Transport(e.to_string()),
                    elapsed_ms,
                )
            }
        }
    }
}
