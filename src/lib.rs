//! # biopaper-mcp
//!
//! A Model Context Protocol (MCP) server that searches biology papers through
//! the Europe PMC REST API.
//!
//! ## Architecture
//!
//! - [`models`]: raw and normalized paper records, queries and results
//! - [`sources`]: the [`Source`] trait and the Europe PMC client
//! - [`search`]: [`PaperSearchTool`], which filters and truncates results
//! - [`mcp`]: tool/prompt registries and the pmcp server
//! - [`utils`]: HTTP client and progress notification
//! - [`config`]: configuration management

pub mod config;
pub mod mcp;
pub mod models;
pub mod search;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use models::{PaperRecord, SearchQuery, SearchResult};
pub use search::PaperSearchTool;
pub use sources::{EuropePmcSource, Source};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
