//! Parameter validation
//!
//! Pure domain logic that checks an invocation's parameter map against a
//! tool's declared schema. No I/O, no external schema library.

use serde_json::{Map, Value};
use thiserror::Error;

use super::entities::{ParameterType, ToolDefinition};

/// Why an invocation's parameters were rejected.
///
/// The rendered messages are a fixed contract: call sites and tests match
/// the exact wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required parameter is absent from the map
    #[error("Required parameter '{name}' is missing")]
    MissingRequired { name: String },

    /// A present parameter has the wrong runtime type
    #[error("Parameter '{name}' must be a {expected}")]
    WrongType {
        name: String,
        expected: ParameterType,
    },

    /// A present parameter is outside its declared value set
    #[error("Parameter '{name}' must be one of: {}", .allowed.join(", "))]
    NotAllowed { name: String, allowed: Vec<String> },
}

/// Validator for tool invocations
///
/// Pure domain trait: checks a parameter map against a definition without
/// any I/O.
pub trait ParameterValidator {
    /// Validate a parameter map against a tool's declared schema
    fn validate(
        &self,
        tool: &ToolDefinition,
        params: &Map<String, Value>,
    ) -> Result<(), ValidationError>;
}

/// Default implementation of [`ParameterValidator`].
///
/// Required-ness is checked for every parameter before any type or
/// allowed-value check runs: a request missing two required fields reports
/// the first missing one in declaration order, never a type mismatch.
/// Checks short-circuit on the first failure. Keys in the map that no spec
/// declares are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl ParameterValidator for SchemaValidator {
    fn validate(
        &self,
        tool: &ToolDefinition,
        params: &Map<String, Value>,
    ) -> Result<(), ValidationError> {
        for spec in &tool.parameters {
            if spec.required && !params.contains_key(&spec.name) {
                return Err(ValidationError::MissingRequired {
                    name: spec.name.clone(),
                });
            }
        }

        for spec in &tool.parameters {
            let Some(value) = params.get(&spec.name) else {
                continue;
            };

            if !spec.param_type.matches(value) {
                return Err(ValidationError::WrongType {
                    name: spec.name.clone(),
                    expected: spec.param_type,
                });
            }

            if !spec.allows(value) {
                return Err(ValidationError::NotAllowed {
                    name: spec.name.clone(),
                    allowed: spec.allowed_values.clone().unwrap_or_default(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{ParameterSpec, ToolCategory};
    use serde_json::json;

    fn params(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn petition_tool() -> ToolDefinition {
        ToolDefinition::new("petition_generator", "Petition Generator", ToolCategory::Drafting)
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
                "Summary of the case facts",
                ParameterType::String,
                true,
            ))
            .with_parameter(ParameterSpec::new(
                "claims",
                "Individual claims to include",
                ParameterType::Array,
                false,
            ))
            .with_parameter(ParameterSpec::new(
                "metadata",
                "Extra drafting hints",
                ParameterType::Object,
                false,
            ))
    }

    #[test]
    fn test_empty_map_reports_first_required_in_declaration_order() {
        let result = SchemaValidator.validate(&petition_tool(), &Map::new());

        assert_eq!(
            result.unwrap_err().to_string(),
            "Required parameter 'petition_type' is missing"
        );
    }

    #[test]
    fn test_missing_later_required_reported_by_declaration_order() {
        // First required present, second missing
        let map = params(&[("petition_type", json!("inicial"))]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Required parameter 'case_summary' is missing"
        );
    }

    #[test]
    fn test_required_checked_before_any_type_check() {
        // petition_type has the wrong type AND case_summary is missing;
        // the missing-required error must win.
        let map = params(&[("petition_type", json!(42))]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Required parameter 'case_summary' is missing"
        );
    }

    #[test]
    fn test_wrong_type_message() {
        let map = params(&[
            ("petition_type", json!("inicial")),
            ("case_summary", json!(123)),
        ]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Parameter 'case_summary' must be a string"
        );
    }

    #[test]
    fn test_enum_rejection_lists_all_values_in_order() {
        let map = params(&[
            ("petition_type", json!("invalida")),
            ("case_summary", json!("Cobranca de alugueis atrasados")),
        ]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Parameter 'petition_type' must be one of: inicial, contestacao, recurso, agravo, embargos"
        );
    }

    #[test]
    fn test_type_check_runs_before_enum_check() {
        let map = params(&[
            ("petition_type", json!(7)),
            ("case_summary", json!("ok")),
        ]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Parameter 'petition_type' must be a string"
        );
    }

    #[test]
    fn test_array_rejected_where_object_expected() {
        let map = params(&[
            ("petition_type", json!("recurso")),
            ("case_summary", json!("ok")),
            ("metadata", json!(["not", "a", "map"])),
        ]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Parameter 'metadata' must be a object"
        );
    }

    #[test]
    fn test_object_rejected_where_array_expected() {
        let map = params(&[
            ("petition_type", json!("recurso")),
            ("case_summary", json!("ok")),
            ("claims", json!({"first": "danos morais"})),
        ]);
        let result = SchemaValidator.validate(&petition_tool(), &map);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Parameter 'claims' must be a array"
        );
    }

    #[test]
    fn test_valid_call_returns_ok() {
        let map = params(&[
            ("petition_type", json!("contestacao")),
            ("case_summary", json!("Acao de despejo por falta de pagamento")),
            ("claims", json!(["prescricao", "pagamento parcial"])),
            ("metadata", json!({"tone": "formal"})),
        ]);

        assert!(SchemaValidator.validate(&petition_tool(), &map).is_ok());
    }

    #[test]
    fn test_extra_keys_are_not_errors() {
        let map = params(&[
            ("petition_type", json!("agravo")),
            ("case_summary", json!("ok")),
            ("unknown_extra", json!("ignored")),
        ]);

        assert!(SchemaValidator.validate(&petition_tool(), &map).is_ok());
    }

    #[test]
    fn test_optional_parameters_may_be_absent() {
        let map = params(&[
            ("petition_type", json!("embargos")),
            ("case_summary", json!("ok")),
        ]);

        assert!(SchemaValidator.validate(&petition_tool(), &map).is_ok());
    }
}
