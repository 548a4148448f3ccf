//! Tool catalog — immutable registry of tool definitions

use std::collections::HashMap;

use super::entities::{ToolCategory, ToolDefinition};

/// Immutable registry of tool definitions.
///
/// Built once at startup and never mutated afterwards, so concurrent
/// invocations can share it without locking. Lookups are by exact id;
/// listing preserves declaration order.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    /// Definitions in declaration order
    tools: Vec<ToolDefinition>,
    /// Tool id -> index into `tools`
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a definition (builder pattern).
    ///
    /// Re-registering an id replaces the definition in place, keeping its
    /// original declaration position.
    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.index.get(&tool.id) {
            Some(&position) => self.tools[position] = tool,
            None => {
                self.index.insert(tool.id.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    /// All definitions in declaration order
    pub fn all(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Look up a definition by exact id
    pub fn get(&self, id: &str) -> Option<&ToolDefinition> {
        self.index.get(id).map(|&position| &self.tools[position])
    }

    /// Definitions in one category, preserving declaration order
    pub fn by_category(&self, category: ToolCategory) -> Vec<&ToolDefinition> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
