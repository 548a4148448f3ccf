//! Timeline tools: case chronology

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constant
pub const CASE_TIMELINE: &str = "case_timeline";

/// Get the tool definition for case_timeline
pub fn case_timeline_definition() -> ToolDefinition {
    ToolDefinition::new(CASE_TIMELINE, "Case Timeline", ToolCategory::Timeline)
        .with_description("Order case events into a chronology, flagging gaps and conflicts.")
        .with_version("0.9.0")
        .with_endpoint("/tools/case-timeline")
        .with_response_shape("Ordered event list with gap and conflict annotations")
        .with_parameter(ParameterSpec::new(
            "events",
            "Case events, each with a date and a description",
            ParameterType::Array,
            true,
        ))
        .with_parameter(ParameterSpec::new(
            "include_deadlines",
            "Merge computed procedural deadlines into the chronology",
            ParameterType::Boolean,
            false,
        ))
}
