//! The paper search operation behind the `search_european_pmc` tool.
//!
//! One call issues one request for `max_results + 10` records, keeps the
//! records whose abstract is long enough, and stops as soon as it has
//! `max_results` of them. Under-filled pages are not re-queried.
//!
//! Every failure (transport, HTTP status, undecodable body) is folded into
//! the returned [`SearchResult`]; `search` never returns an error.

use std::sync::Arc;

use crate::models::{PaperRecord, RawRecord, SearchQuery, SearchResult};
use crate::sources::{EuropePmcSource, Source, SourceError};
use crate::utils::{report, ProgressNotifier};

/// Message returned when the API has no hits
pub const NO_RESULTS_MESSAGE: &str = "No search results found.";

/// Message returned when the caller asks for zero or fewer papers
pub const NOTHING_REQUESTED_MESSAGE: &str = "max_results must be at least 1; no papers requested.";

/// Searches a literature source and returns normalized papers with abstracts.
#[derive(Debug, Clone)]
pub struct PaperSearchTool {
    source: Arc<dyn Source>,
}

impl PaperSearchTool {
    /// Create a tool over any source
    pub fn new(source: Arc<dyn Source>) -> Self {
        Self { source }
    }

    /// Create a tool over the public Europe PMC API
    pub fn europe_pmc() -> Result<Self, SourceError> {
        Ok(Self::new(Arc::new(EuropePmcSource::new()?)))
    }

    /// Run a search.
    pub async fn search(
        &self,
        query: &SearchQuery,
        notifier: &dyn ProgressNotifier,
    ) -> SearchResult {
        report(
            notifier,
            &format!("Running {} search: {}", self.source.name(), query.query),
        );

        if query.max_results <= 0 {
            tracing::debug!(max_results = query.max_results, "Nothing requested");
            report(notifier, NOTHING_REQUESTED_MESSAGE);
            return SearchResult::empty(&query.query, NOTHING_REQUESTED_MESSAGE);
        }

        report(
            notifier,
            &format!("Sending request to {} API...", self.source.name()),
        );

        let records = match self.source.search(query).await {
            Ok(records) => records,
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(
                    source = self.source.id(),
                    query = %query.query,
                    error = %message,
                    "Search failed"
                );
                report(notifier, &message);
                return SearchResult::failure(&query.query, message);
            }
        };

        if records.is_empty() {
            report(notifier, NO_RESULTS_MESSAGE);
            return SearchResult::empty(&query.query, NO_RESULTS_MESSAGE);
        }

        let fetched = records.len();
        let papers = select_papers(&records, query.max_results);

        tracing::info!(
            source = self.source.id(),
            query = %query.query,
            fetched,
            returned = papers.len(),
            "Search complete"
        );
        report(notifier, &format!("Found {} papers.", papers.len()));

        SearchResult::success(&query.query, papers)
    }
}

/// Normalize qualifying records in API order, stopping after `max_results`.
///
/// Records past the point where the limit is reached are never inspected.
pub fn select_papers(records: &[RawRecord], max_results: i64) -> Vec<PaperRecord> {
    let limit = usize::try_from(max_results).unwrap_or(0);
    let mut papers = Vec::with_capacity(limit.min(records.len()));

    for record in records {
        if papers.len() >= limit {
            break;
        }
        if let Some(paper) = PaperRecord::from_raw(record) {
            papers.push(paper);
        }
    }

    papers
}
