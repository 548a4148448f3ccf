//! Research tools: jurisprudence search

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constant
pub const JURISPRUDENCE_SEARCH: &str = "jurisprudence_search";

/// Get the tool definition for jurisprudence_search
pub fn jurisprudence_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        JURISPRUDENCE_SEARCH,
        "Jurisprudence Search",
        ToolCategory::Research,
    )
    .with_description("Search case law for precedents matching a free-text legal question.")
    .with_version("1.0.2")
    .with_endpoint("/tools/jurisprudence-search")
    .with_response_shape("Ranked precedent list with court, date, and headnote per entry")
    .with_parameter(ParameterSpec::new(
        "query",
        "Legal question or thesis to find precedents for",
        ParameterType::String,
        true,
    ))
    .with_parameter(ParameterSpec::new(
        "court",
        "Restrict results to one court (e.g. STJ, TJSP)",
        ParameterType::String,
        false,
    ))
    .with_parameter(ParameterSpec::new(
        "date_range",
        "Decision date window with from/to keys",
        ParameterType::Object,
        false,
    ))
    .with_parameter(ParameterSpec::new(
        "max_results",
        "Maximum number of precedents to return",
        ParameterType::Number,
        false,
    ))
}
