//! Drafting tools: petition generation

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constant
pub const PETITION_GENERATOR: &str = "petition_generator";

/// Get the tool definition for petition_generator
pub fn petition_generator_definition() -> ToolDefinition {
    ToolDefinition::new(PETITION_GENERATOR, "Petition Generator", ToolCategory::Drafting)
        .with_description(
            "Generate a draft petition from the case facts and the requested petition type.",
        )
        .with_version("2.1.0")
        .with_endpoint("/tools/petition-generator")
        .with_response_shape("Draft petition text with numbered sections and placeholder fields")
        .with_parameter(
            ParameterSpec::new(
                "petition_type",
                "Kind of petition to draft",
                ParameterType::String,
                true,
            )
            .with_allowed_values(["inicial", "contestacao", "recurso", "agravo", "embargos"]),
        )
        .with_parameter(ParameterSpec::new(
            "case_summary",
            "Summary of the case facts the draft is built from",
            ParameterType::String,
            true,
        ))
        .with_parameter(ParameterSpec::new(
            "claims",
            "Individual claims to develop, in the order they should appear",
            ParameterType::Array,
            false,
        ))
        .with_parameter(ParameterSpec::new(
            "urgent",
            "Request urgency wording and an injunction section",
            ParameterType::Boolean,
            false,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_domain::tool::traits::{ParameterValidator, SchemaValidator};
    use serde_json::json;

    #[test]
    fn test_petition_type_outside_enum_is_rejected_with_full_list() {
        let tool = petition_generator_definition();
        let params = [
            ("petition_type".to_string(), json!("invalida")),
            ("case_summary".to_string(), json!("Cobranca de alugueis")),
        ]
        .into_iter()
        .collect();

        let error = SchemaValidator.validate(&tool, &params).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parameter 'petition_type' must be one of: inicial, contestacao, recurso, agravo, embargos"
        );
    }

    #[test]
    fn test_every_enum_member_is_accepted() {
        let tool = petition_generator_definition();
        for kind in ["inicial", "contestacao", "recurso", "agravo", "embargos"] {
            let params = [
                ("petition_type".to_string(), json!(kind)),
                ("case_summary".to_string(), json!("ok")),
            ]
            .into_iter()
            .collect();
            assert!(SchemaValidator.validate(&tool, &params).is_ok(), "{}", kind);
        }
    }
}
