//! Utility modules supporting paper search.
//!
//! - [`HttpClient`]: shared reqwest client with user agent and timeouts
//! - [`ProgressNotifier`]: best-effort progress reporting for tool calls
//! - [`report`]: deliver a progress message, falling back to stderr on failure
//!
//! # HTTP Client
//!
//! ```rust,no_run
//! use biopaper_mcp::utils::HttpClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let response = client
//!     .get("https://www.ebi.ac.uk/europepmc/webservices/rest/search")
//!     .query(&[("query", "CRISPR"), ("format", "json")])
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod http;
mod progress;

pub use http::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use progress::{
    report, report_to, ChannelNotifier, ConsoleNotifier, NoopNotifier, NotifyError, ProgressNotifier,
    TracingNotifier,
};
