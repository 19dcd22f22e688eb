//! Tool registry for MCP tools.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::handlers::SearchEuropePmcHandler;
use crate::search::PaperSearchTool;

/// Name of the Europe PMC search tool
pub const SEARCH_TOOL_NAME: &str = "search_european_pmc";

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search_european_pmc")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
///
/// `Err` is reserved for malformed arguments; operational failures are
/// reported inside the returned value.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Registry for all MCP tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry holding the paper search tool
    pub fn new(search: PaperSearchTool) -> Self {
        let mut registry = Self::default();

        registry.register(Tool {
            name: SEARCH_TOOL_NAME.to_string(),
            description: "Search biology papers with Europe PMC. Only papers with an abstract are returned.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "search_query": {
                        "type": "string",
                        "description": "Complete Europe PMC query. Supports AND/OR/NOT and field qualifiers such as TITLE, ABSTRACT and FIRST_PDATE, e.g. (TITLE:\"virus\" OR TITLE:\"viral\") AND (ABSTRACT:\"metagenome\") AND (FIRST_PDATE:[2020-01-01 TO 2025-12-31])"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of papers to return",
                        "default": 10
                    }
                },
                "required": ["search_query"]
            }),
            handler: Arc::new(SearchEuropePmcHandler::new(search)),
        });

        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// All registered tools
    pub fn all(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
