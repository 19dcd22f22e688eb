//! MCP (Model Context Protocol) implementation.

mod handlers;
pub mod prompts;
pub mod server;
mod tools;

pub use handlers::SearchEuropePmcHandler;
pub use prompts::{search_biology_papers, SEARCH_PROMPT_NAME};
pub use server::McpServer;
pub use tools::{Tool, ToolHandler, ToolRegistry, SEARCH_TOOL_NAME};
