//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{RawRecord, SearchQuery};
use crate::sources::{Source, SourceError};

/// Canned outcome for the next searches
#[derive(Debug, Clone)]
enum MockResponse {
    Records(Vec<RawRecord>),
    Error(String),
}

/// A mock source for testing that returns predefined records.
#[derive(Debug, Default)]
pub struct MockSource {
    response: Mutex<Option<MockResponse>>,
    last_query: Mutex<Option<SearchQuery>>,
    calls: AtomicUsize,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source that returns the given records.
    pub fn with_records(records: Vec<RawRecord>) -> Self {
        let source = Self::new();
        source.set_records(records);
        source
    }

    /// Set the records to return.
    pub fn set_records(&self, records: Vec<RawRecord>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(MockResponse::Records(records));
    }

    /// Make every search fail with an API error.
    pub fn set_api_error(&self, status: impl Into<String>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(MockResponse::Error(status.into()));
    }

    /// Number of searches performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent query received.
    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());

        let guard = self.response.lock().unwrap();
        match &*guard {
            Some(MockResponse::Records(records)) => Ok(records.clone()),
            Some(MockResponse::Error(status)) => Err(SourceError::Api(status.clone())),
            None => Ok(Vec::new()),
        }
    }
}

/// Helper function to create a raw record for testing.
///
/// Pass `None` as the abstract to model a record the API returned without one.
pub fn make_record(id: &str, title: &str, abstract_text: Option<&str>) -> RawRecord {
    RawRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        abstract_text: abstract_text.map(str::to_string),
        ..Default::default()
    }
}
