//! Analysis tools: contract review

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constant
pub const CONTRACT_ANALYZER: &str = "contract_analyzer";

/// Get the tool definition for contract_analyzer
pub fn contract_analyzer_definition() -> ToolDefinition {
    ToolDefinition::new(CONTRACT_ANALYZER, "Contract Analyzer", ToolCategory::Analysis)
        .with_description(
            "Review a contract for unusual clauses, obligations, and termination risks.",
        )
        .with_version("1.3.0")
        .with_endpoint("/tools/contract-analyzer")
        .with_response_shape("Clause-by-clause findings with a risk grade per clause")
        .with_parameter(ParameterSpec::new(
            "contract_text",
            "Full text of the contract under review",
            ParameterType::String,
            true,
        ))
        .with_parameter(ParameterSpec::new(
            "focus_areas",
            "Clause topics to prioritize (e.g. rescission, penalties)",
            ParameterType::Array,
            false,
        ))
        .with_parameter(
            ParameterSpec::new(
                "risk_profile",
                "How aggressively to flag borderline clauses",
                ParameterType::String,
                false,
            )
            .with_allowed_values(["conservative", "balanced", "aggressive"]),
        )
}
