use anyhow::Result;
use biopaper_mcp::config::{find_config_file, get_config, load_config, Config};
use biopaper_mcp::mcp::McpServer;
use biopaper_mcp::models::{SearchQuery, SearchResult};
use biopaper_mcp::sources::EuropePmcSource;
use biopaper_mcp::utils::ConsoleNotifier;
use biopaper_mcp::PaperSearchTool;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample query used by the `debug` command
const DEBUG_QUERY: &str = r#"(TITLE:"virus" OR TITLE:"viral") AND (ABSTRACT:"metagenome") AND (FIRST_PDATE:[2020-01-01 TO 2025-12-31])"#;

/// Number of papers the `debug` command asks for
const DEBUG_MAX_RESULTS: i64 = 3;

/// biopaper-mcp - Search biology papers on Europe PMC over MCP
#[derive(Parser, Debug)]
#[command(name = "biopaper-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server for searching biology papers on Europe PMC", long_about = None)]
struct Cli {
    /// Enable verbose logging (-v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run one sample query against the live API and print the results
    Debug,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // stdout carries JSON-RPC in stdio mode, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("biopaper_mcp={}", level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return Ok(load_config(path)?);
    }
    if let Some(path) = find_config_file() {
        tracing::info!("Using config file: {}", path.display());
        return Ok(load_config(&path)?);
    }
    Ok(get_config()?)
}

async fn run_debug(tool: &PaperSearchTool) {
    let color = std::io::stdout().is_terminal();

    println!("Running test search...");
    println!("Search query: {}", DEBUG_QUERY);

    let query = SearchQuery::new(DEBUG_QUERY).max_results(DEBUG_MAX_RESULTS);
    let result = tool.search(&query, &ConsoleNotifier).await;
    print_result(&result, color);
}

fn print_result(result: &SearchResult, color: bool) {
    if let Some(error) = &result.error {
        println!("Search failed: {}", error);
    }
    println!("Results: {} papers", result.papers.len());

    for (i, paper) in result.papers.iter().enumerate() {
        let heading = format!("Paper {}:", i + 1);
        if color {
            println!("\n{}", heading.bold());
        } else {
            println!("\n{}", heading);
        }
        println!("Title: {}", paper.title);
        println!("Authors: {}", paper.authors);
        println!("URL: {}", paper.url.as_deref().unwrap_or("none"));
        let preview: String = paper.r#abstract.chars().take(100).collect();
        println!("Abstract: {}...", preview);
        println!("---");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(cli.config.as_ref())?;
    let source = EuropePmcSource::from_config(&config.europe_pmc)?;
    let tool = PaperSearchTool::new(Arc::new(source));

    match cli.command {
        Some(Commands::Debug) => run_debug(&tool).await,
        None => {
            let server = McpServer::new(tool)?;
            server.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_runs_server() {
        let cli = Cli::parse_from(["biopaper-mcp"]);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_debug_command() {
        let cli = Cli::parse_from(["biopaper-mcp", "debug"]);
        assert_eq!(cli.command, Some(Commands::Debug));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["biopaper-mcp", "-vv", "debug"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_argument() {
        assert!(Cli::try_parse_from(["biopaper-mcp", "serve-http"]).is_err());
    }
}
