//! Tool domain module
//!
//! This module defines the core abstractions of the **tool invocation
//! layer** — how the practice calls its externally-implemented AI tools in
//! a validated, uniformly-reported manner.
//!
//! # Overview
//!
//! Every tool is defined by a [`ToolDefinition`] (id, category, version,
//! endpoint, parameter schema), looked up in a read-only [`ToolCatalog`],
//! invoked via a [`ToolInvocation`], and reported through a
//! [`ToolInvocationResult`] envelope.
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌──────────────────────┐
//! │ ToolCatalog  │───▶│ ToolInvocation │───▶│ ToolInvocationResult │
//! │ (registry)   │    │ (request)      │    │ (envelope)           │
//! └──────┬───────┘    └────────────────┘    └──────────────────────┘
//!        │
//!        └─ "petition_generator" → ToolDefinition
//! ```
//!
//! # Validation Before Dispatch
//!
//! [`SchemaValidator`] checks the invocation's parameter map against the
//! declared schema with no external schema library. A request that fails
//! validation never triggers a network call, and the first violated rule in
//! parameter declaration order decides which message is reported.
//!
//! # Key Types
//!
//! - [`ToolCatalog`] — immutable registry, exact-id lookups
//! - [`ToolDefinition`] — schema for a single tool
//! - [`ToolInvocation`] — a request with a dynamic parameter map
//! - [`ToolInvocationResult`] — the uniform success/failure envelope
//! - [`ParameterValidator`] — pure validation trait
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`InvokeToolUseCase`): the dispatcher, total and
//!   non-throwing
//! - **Infrastructure** (`HttpToolEndpoint`): the HTTP wire contract

pub mod catalog;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use catalog::ToolCatalog;
pub use entities::{
    InvocationContext, ParameterSpec, ParameterType, ToolCategory, ToolDefinition, ToolInvocation,
};
pub use traits::{ParameterValidator, SchemaValidator, ValidationError};
pub use value_objects::{InvocationError, ToolInvocationResult};
