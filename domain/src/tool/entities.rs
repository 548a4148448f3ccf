//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Functional category of a tool in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Drafting tools (petitions, contracts)
    Drafting,
    /// Analysis tools (contract review, risk assessment)
    Analysis,
    /// Research tools (jurisprudence, doctrine)
    Research,
    /// Document tools (summarization, extraction)
    Document,
    /// Timeline tools (case chronology)
    Timeline,
    /// Calculation tools (deadlines, fees)
    Calculation,
}

impl ToolCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ToolCategory::Drafting => "drafting",
            ToolCategory::Analysis => "analysis",
            ToolCategory::Research => "research",
            ToolCategory::Document => "document",
            ToolCategory::Timeline => "timeline",
            ToolCategory::Calculation => "calculation",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drafting" => Ok(ToolCategory::Drafting),
            "analysis" => Ok(ToolCategory::Analysis),
            "research" => Ok(ToolCategory::Research),
            "document" => Ok(ToolCategory::Document),
            "timeline" => Ok(ToolCategory::Timeline),
            "calculation" => Ok(ToolCategory::Calculation),
            _ => Err(format!("Unknown tool category: {}", s)),
        }
    }
}

/// Declared type of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParameterType {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Object => "object",
            ParameterType::Array => "array",
        }
    }

    /// Check a runtime value against this declared type.
    ///
    /// Exhaustive over the JSON value union: an array never satisfies
    /// `Object` and a map never satisfies `Array`, even though both are
    /// collections. `null` satisfies nothing.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ParameterType::String, Value::String(_))
                | (ParameterType::Number, Value::Number(_))
                | (ParameterType::Boolean, Value::Bool(_))
                | (ParameterType::Object, Value::Object(_))
                | (ParameterType::Array, Value::Array(_))
        )
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Key into the invocation's parameter map
    pub name: String,
    /// Declared runtime type
    pub param_type: ParameterType,
    /// Whether this parameter must be present
    pub required: bool,
    /// Human-readable description
    pub description: String,
    /// Closed set of allowed values, checked after the type check.
    /// Applicable to any type; the built-in catalog only constrains strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl ParameterSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        param_type: ParameterType,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            required,
            description: description.into(),
            allowed_values: None,
        }
    }

    pub fn with_allowed_values(
        mut self,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Membership test against the allowed-value set.
    ///
    /// Non-string values are compared by their JSON rendering, so the set
    /// can constrain any type even though only strings use it today.
    pub fn allows(&self, value: &Value) -> bool {
        let Some(allowed) = &self.allowed_values else {
            return true;
        };
        match value {
            Value::String(s) => allowed.iter().any(|a| a == s),
            other => {
                let rendered = other.to_string();
                allowed.iter().any(|a| *a == rendered)
            }
        }
    }
}

/// Definition of an externally-implemented AI tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique catalog key (e.g. "petition_generator")
    pub id: String,
    /// Display name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Functional category
    pub category: ToolCategory,
    /// Semantic version, echoed back on every successful invocation
    pub version: String,
    /// Relative path appended to the configured execution base URL
    pub endpoint: String,
    /// Parameter specifications. Declaration order drives validation order
    /// and therefore which error is reported first.
    pub parameters: Vec<ParameterSpec>,
    /// Free-form description of the response payload. Display only; the
    /// payload is surfaced as opaque JSON and never checked against this.
    pub response_shape: String,
}

impl ToolDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ToolCategory,
    ) -> Self {
        let id = id.into();
        let endpoint = format!("/tools/{}", id.replace('_', "-"));
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category,
            version: "1.0.0".to_string(),
            endpoint,
            parameters: Vec::new(),
            response_shape: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_response_shape(mut self, response_shape: impl Into<String>) -> Self {
        self.response_shape = response_shape.into();
        self
    }

    pub fn with_parameter(mut self, param: ParameterSpec) -> Self {
        self.parameters.push(param);
        self
    }

    /// First required parameter in declaration order, if any
    pub fn first_required(&self) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.required)
    }
}

/// Correlation metadata forwarded with an invocation.
///
/// Carried to the execution endpoint verbatim; validation never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    /// Case / matter identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    /// Counterparty identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,
    /// Conversation thread identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }

    pub fn with_counterparty(mut self, counterparty_id: impl Into<String>) -> Self {
        self.counterparty_id = Some(counterparty_id.into());
        self
    }

    pub fn with_thread(mut self, thread_id: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.case_id.is_none() && self.counterparty_id.is_none() && self.thread_id.is_none()
    }
}

/// A request to invoke a tool from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Catalog id of the tool to invoke
    pub tool_id: String,
    /// Dynamically-typed parameter map
    pub parameters: Map<String, Value>,
    /// Optional correlation metadata, forwarded unmodified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<InvocationContext>,
}

impl ToolInvocation {
    pub fn new(tool_id: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            parameters: Map::new(),
            context: None,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_context(mut self, context: InvocationContext) -> Self {
        self.context = Some(context);
        self
    }
}
