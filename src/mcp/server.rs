//! MCP server implementation using pmcp (Pragmatic AI's rust-mcp-sdk).
//!
//! The server is built once from explicit registries: the search tool and
//! the prompt are handed in, nothing is registered globally.

use crate::mcp::prompts::{self, SEARCH_PROMPT_NAME};
use crate::mcp::tools::ToolRegistry;
use crate::search::PaperSearchTool;
use async_trait::async_trait;
use pmcp::types::{Content, GetPromptResult, PromptMessage, Role};
use pmcp::{
    Error, PromptHandler, RequestHandlerExtra, Server, ServerCapabilities, ToolHandler, ToolInfo,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Server name announced to MCP clients
pub const SERVER_NAME: &str = "biopaper-mcp";

/// The MCP server exposing Europe PMC paper search
pub struct McpServer {
    server: Server,
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").finish_non_exhaustive()
    }
}

impl McpServer {
    /// Create a new MCP server around the given search tool
    pub fn new(search: PaperSearchTool) -> Result<Self, pmcp::Error> {
        Self::from_registry(ToolRegistry::new(search))
    }

    /// Create a server from a prepared tool registry
    pub fn from_registry(tools: ToolRegistry) -> Result<Self, pmcp::Error> {
        let server = Self::build_server_impl(tools)?;
        Ok(Self { server })
    }

    /// Build the MCP server with tool and prompt handlers (internal implementation)
    fn build_server_impl(tools: ToolRegistry) -> Result<Server, pmcp::Error> {
        let mut builder = Server::builder()
            .name(SERVER_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::default());

        for tool in tools.all() {
            let tool_handler = ToolWrapper {
                name: tool.name.clone(),
                description: Some(tool.description.clone()),
                input_schema: tool.input_schema.clone(),
                handler: tool.handler.clone(),
            };
            builder = builder.tool(tool_handler.name.clone(), tool_handler);
        }

        builder = builder.prompt(SEARCH_PROMPT_NAME, SearchPromptHandler);

        builder.build()
    }

    /// Run the server in stdio mode (for Claude Desktop and other MCP clients)
    pub async fn run(self) -> Result<(), pmcp::Error> {
        tracing::info!("Starting MCP server in stdio mode");
        self.server.run_stdio().await
    }
}

/// Wrapper for adapting our Tool to pmcp's ToolHandler
#[derive(Clone)]
struct ToolWrapper {
    name: String,
    description: Option<String>,
    input_schema: Value,
    handler: Arc<dyn crate::mcp::tools::ToolHandler>,
}

#[async_trait]
impl ToolHandler for ToolWrapper {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> Result<Value, Error> {
        tracing::debug!(tool = %self.name, "Tool called");
        self.handler
            .execute(args)
            .await
            .map_err(Error::invalid_params)
    }

    fn metadata(&self) -> Option<ToolInfo> {
        Some(ToolInfo::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        ))
    }
}

/// Serves the `search_biology_papers` prompt
#[derive(Debug, Clone, Copy)]
struct SearchPromptHandler;

#[async_trait]
impl PromptHandler for SearchPromptHandler {
    async fn handle(
        &self,
        args: HashMap<String, String>,
        _extra: RequestHandlerExtra,
    ) -> Result<GetPromptResult, Error> {
        let text = prompts::render(&args).map_err(Error::invalid_params)?;

        let messages = vec![PromptMessage {
            role: Role::User,
            content: Content::Text { text },
        }];

        Ok(GetPromptResult::new(
            messages,
            Some("Literature review of biology papers via Europe PMC".to_string()),
        ))
    }
}
