//! Search request and result models.

use serde::{Deserialize, Serialize};

use super::paper::PaperRecord;

/// Default number of papers a search asks for
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// Extra records requested on top of `max_results` to absorb records
/// dropped for missing or short abstracts
pub const OVER_FETCH: i64 = 10;

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Europe PMC query string, passed through verbatim
    pub query: String,

    /// Number of qualifying papers wanted
    pub max_results: i64,
}

impl SearchQuery {
    /// Create a new search query with the default result limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: i64) -> Self {
        self.max_results = max;
        self
    }

    /// Page size sent to the API
    pub fn page_size(&self) -> i64 {
        self.max_results.saturating_add(OVER_FETCH)
    }
}

/// Outcome of a paper search, always returned as data.
///
/// Serializes to `{search_query, papers}` plus either `message` (no results)
/// or `error` (transport, HTTP or decode failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query exactly as the caller supplied it
    pub search_query: String,

    /// Informational note, set when nothing was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Normalized papers, in API order
    pub papers: Vec<PaperRecord>,
}

impl SearchResult {
    /// Create a successful result
    pub fn success(query: impl Into<String>, papers: Vec<PaperRecord>) -> Self {
        Self {
            search_query: query.into(),
            message: None,
            error: None,
            papers,
        }
    }

    /// Create an empty result carrying an informational message
    pub fn empty(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            message: Some(message.into()),
            error: None,
            papers: Vec::new(),
        }
    }

    /// Create a failed result
    pub fn failure(query: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            message: None,
            error: Some(error.into()),
            papers: Vec::new(),
        }
    }

    /// Whether the search failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Number of papers returned
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether no papers were returned
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}
