//! Literature sources behind the search tool.
//!
//! A [`Source`] turns a [`SearchQuery`] into the raw records returned by a
//! remote API. Filtering and normalization happen later, in
//! [`PaperSearchTool`](crate::search::PaperSearchTool), so a source only has
//! to speak its API's wire format.
//!
//! [`EuropePmcSource`] talks to the Europe PMC REST API; [`MockSource`]
//! returns canned records for tests.

mod europe_pmc;
pub mod mock;

pub use europe_pmc::{EuropePmcSource, EUROPE_PMC_BASE_URL};
pub use mock::MockSource;

use crate::models::{RawRecord, SearchQuery};
use async_trait::async_trait;

/// The Source trait defines the interface for literature search backends.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g., "europe_pmc")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Fetch raw records for the query, in the order the API ranks them.
    ///
    /// Implementations request `query.page_size()` records and perform no
    /// filtering of their own.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the source
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidRequest(format!("Bad URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::Api("500 Internal Server Error".to_string());
        assert_eq!(err.to_string(), "API error: 500 Internal Server Error");

        let err: SourceError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Parse error: JSON:"));
    }
}
