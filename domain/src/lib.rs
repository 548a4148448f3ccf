//! Domain layer for juris
//!
//! This crate contains the core business types of the tool invocation layer.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tool Invocation
//!
//! Every AI tool the practice exposes is described by a [`ToolDefinition`]
//! in an immutable [`ToolCatalog`]. An invocation is validated against the
//! declared parameter schema before anything touches the network, and every
//! outcome is normalized into a [`ToolInvocationResult`] envelope.
//!
//! ## Quick Actions
//!
//! Chat-embedded side effects (create a task, request a document, mark a
//! step complete) skip schema validation: they carry a single free-text
//! field and are always followed by an audit message on the originating
//! thread.

pub mod practice;
pub mod tool;

// Re-export commonly used types
pub use practice::entities::{PracticeRecord, QuickActionRequest, QuickActionType};
pub use tool::{
    catalog::ToolCatalog,
    entities::{
        InvocationContext, ParameterSpec, ParameterType, ToolCategory, ToolDefinition,
        ToolInvocation,
    },
    traits::{ParameterValidator, SchemaValidator, ValidationError},
    value_objects::{InvocationError, ToolInvocationResult},
};
