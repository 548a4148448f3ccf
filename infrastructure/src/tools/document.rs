//! Document tools: summarization

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constant
pub const DOCUMENT_SUMMARIZER: &str = "document_summarizer";

/// Get the tool definition for document_summarizer
pub fn document_summarizer_definition() -> ToolDefinition {
    ToolDefinition::new(
        DOCUMENT_SUMMARIZER,
        "Document Summarizer",
        ToolCategory::Document,
    )
    .with_description("Summarize a legal document, optionally highlighting obligations.")
    .with_version("1.1.0")
    .with_endpoint("/tools/document-summarizer")
    .with_response_shape("Summary paragraphs plus an obligations table when requested")
    .with_parameter(ParameterSpec::new(
        "document_text",
        "Full text of the document to summarize",
        ParameterType::String,
        true,
    ))
    .with_parameter(ParameterSpec::new(
        "max_length",
        "Maximum summary length in characters",
        ParameterType::Number,
        false,
    ))
    .with_parameter(ParameterSpec::new(
        "highlight_obligations",
        "Extract obligations and deadlines into a separate table",
        ParameterType::Boolean,
        false,
    ))
}
