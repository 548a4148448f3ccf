//! Calculation tools: procedural deadlines and fees

use juris_domain::tool::entities::{ParameterSpec, ParameterType, ToolCategory, ToolDefinition};

/// Tool name constants
pub const DEADLINE_CALCULATOR: &str = "deadline_calculator";
pub const FEE_CALCULATOR: &str = "fee_calculator";

/// Get the tool definition for deadline_calculator
pub fn deadline_calculator_definition() -> ToolDefinition {
    ToolDefinition::new(
        DEADLINE_CALCULATOR,
        "Deadline Calculator",
        ToolCategory::Calculation,
    )
    .with_description("Compute procedural deadlines from a triggering event date.")
    .with_version("1.4.1")
    .with_endpoint("/tools/deadline-calculator")
    .with_response_shape("Deadline date with the counting rule applied at each step")
    .with_parameter(ParameterSpec::new(
        "event_date",
        "Date of the triggering event (ISO 8601)",
        ParameterType::String,
        true,
    ))
    .with_parameter(ParameterSpec::new(
        "deadline_days",
        "Length of the deadline in days",
        ParameterType::Number,
        true,
    ))
    .with_parameter(ParameterSpec::new(
        "business_days",
        "Count business days instead of calendar days",
        ParameterType::Boolean,
        false,
    ))
    .with_parameter(ParameterSpec::new(
        "court_calendar",
        "Holiday calendar overrides keyed by date",
        ParameterType::Object,
        false,
    ))
}

/// Get the tool definition for fee_calculator
pub fn fee_calculator_definition() -> ToolDefinition {
    ToolDefinition::new(FEE_CALCULATOR, "Fee Calculator", ToolCategory::Calculation)
        .with_description("Estimate legal fees from the case value and the applicable fee table.")
        .with_version("1.0.0")
        .with_endpoint("/tools/fee-calculator")
        .with_response_shape("Fee breakdown with table rate, adjustments, and total")
        .with_parameter(ParameterSpec::new(
            "case_value",
            "Economic value of the case",
            ParameterType::Number,
            true,
        ))
        .with_parameter(
            ParameterSpec::new(
                "fee_table",
                "Which fee table to apply",
                ParameterType::String,
                false,
            )
            .with_allowed_values(["oab", "contractual", "court"]),
        )
        .with_parameter(ParameterSpec::new(
            "installments",
            "Number of installments to spread the fee over",
            ParameterType::Number,
            false,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_domain::tool::traits::{ParameterValidator, SchemaValidator};
    use serde_json::{Map, json};

    #[test]
    fn test_empty_invocation_reports_event_date_first() {
        let tool = deadline_calculator_definition();
        let error = SchemaValidator.validate(&tool, &Map::new()).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Required parameter 'event_date' is missing"
        );
    }

    #[test]
    fn test_court_calendar_rejects_arrays() {
        let tool = deadline_calculator_definition();
        let params = [
            ("event_date".to_string(), json!("2026-08-01")),
            ("deadline_days".to_string(), json!(15)),
            ("court_calendar".to_string(), json!(["2026-09-07"])),
        ]
        .into_iter()
        .collect();

        let error = SchemaValidator.validate(&tool, &params).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parameter 'court_calendar' must be a object"
        );
    }

    #[test]
    fn test_fee_table_enum_message() {
        let tool = fee_calculator_definition();
        let params = [
            ("case_value".to_string(), json!(250_000.0)),
            ("fee_table".to_string(), json!("sindical")),
        ]
        .into_iter()
        .collect();

        let error = SchemaValidator.validate(&tool, &params).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Parameter 'fee_table' must be one of: oab, contractual, court"
        );
    }

    #[test]
    fn test_case_value_must_be_numeric() {
        let tool = fee_calculator_definition();
        let params = [("case_value".to_string(), json!("250000"))]
            .into_iter()
            .collect();

        let error = SchemaValidator.validate(&tool, &params).unwrap_err();
        assert_eq!(error.to_string(), "Parameter 'case_value' must be a number");
    }
}
