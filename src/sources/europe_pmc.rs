//! EuropePMC research source implementation using their REST API.
//!
//! EuropePMC indexes PubMed, PMC, and preprints from bioRxiv/medRxiv.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

use crate::config::EuropePmcConfig;
use crate::models::{RawRecord, SearchQuery};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// EuropePMC REST API base URL
pub const EUROPE_PMC_BASE_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest";

/// EuropePMC research source
#[derive(Debug, Clone)]
pub struct EuropePmcSource {
    client: Arc<HttpClient>,
    search_url: Url,
}

impl EuropePmcSource {
    /// Create a new EuropePMC source against the public API
    pub fn new() -> Result<Self, SourceError> {
        Self::with_client(Arc::new(HttpClient::new()?), EUROPE_PMC_BASE_URL)
    }

    /// Create a source from configuration
    pub fn from_config(config: &EuropePmcConfig) -> Result<Self, SourceError> {
        let client = HttpClient::with_settings(&config.user_agent, config.timeout())?;
        Self::with_client(Arc::new(client), &config.base_url)
    }

    /// Create with a custom HTTP client and base URL (for testing)
    pub fn with_client(client: Arc<HttpClient>, base_url: &str) -> Result<Self, SourceError> {
        let search_url = Url::parse(&format!("{}/search", base_url.trim_end_matches('/')))?;
        Ok(Self { client, search_url })
    }

    /// Search endpoint this source queries
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Build the search request
    fn build_request(&self, query: &SearchQuery) -> Result<reqwest::Request, SourceError> {
        let page_size = query.page_size().to_string();

        self.client
            .get(self.search_url.clone())
            .query(&[
                ("query", query.query.as_str()),
                ("format", "json"),
                ("resultType", "core"),
                ("pageSize", page_size.as_str()),
            ])
            .build()
            .map_err(|e| SourceError::InvalidRequest(format!("Failed to build request: {}", e)))
    }

    /// Parse search response JSON.
    ///
    /// Records are decoded one at a time; a record that does not fit
    /// [`RawRecord`] is skipped without failing the page.
    fn parse_search_response(json: &str) -> Result<Vec<RawRecord>, SourceError> {
        let response: SearchResponse = serde_json::from_str(json).map_err(|e| {
            SourceError::Parse(format!("Failed to parse EuropePMC response: {}", e))
        })?;

        let results = response
            .result_list
            .and_then(|list| list.result)
            .unwrap_or_default();

        Ok(results
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| match serde_json::from_value::<RawRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(position, error = %e, "Skipping undecodable EuropePMC record");
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl Source for EuropePmcSource {
    fn id(&self) -> &str {
        "europe_pmc"
    }

    fn name(&self) -> &str {
        "EuropePMC"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, SourceError> {
        let request = self.build_request(query)?;
        tracing::debug!(url = %request.url(), "Querying EuropePMC");

        let response = self
            .client
            .client()
            .execute(request)
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search EuropePMC: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::Api(status.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let records = Self::parse_search_response(&body)?;
        tracing::debug!(count = records.len(), "EuropePMC returned records");
        Ok(records)
    }
}

/// Search response wrapper; only the result list is used
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "resultList", default)]
    result_list: Option<ResultList>,
}

/// List of results
#[derive(Debug, Deserialize)]
struct ResultList {
    #[serde(default)]
    result: Option<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(request: &reqwest::Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_build_request() {
        let source = EuropePmcSource::new().unwrap();
        let query = SearchQuery::new("CRISPR").max_results(5);
        let request = source.build_request(&query).unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(
            request.url().as_str().split('?').next(),
            Some("https://www.ebi.ac.uk/europepmc/webservices/rest/search")
        );
        assert_eq!(
            query_pairs(&request),
            vec![
                ("query".to_string(), "CRISPR".to_string()),
                ("format".to_string(), "json".to_string()),
                ("resultType".to_string(), "core".to_string()),
                ("pageSize".to_string(), "15".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_request_keeps_query_verbatim() {
        let source = EuropePmcSource::new().unwrap();
        let raw = r#"(TITLE:"virus") AND (FIRST_PDATE:[2020-01-01 TO 2025-12-31])"#;
        let request = source.build_request(&SearchQuery::new(raw)).unwrap();

        assert_eq!(query_pairs(&request)[0].1, raw);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = Arc::new(HttpClient::new().unwrap());
        let source = EuropePmcSource::with_client(client, "http://127.0.0.1:1234/rest/").unwrap();
        assert_eq!(source.search_url().as_str(), "http://127.0.0.1:1234/rest/search");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = Arc::new(HttpClient::new().unwrap());
        let err = EuropePmcSource::with_client(client, "not a url").unwrap_err();
        assert!(matches!(err, SourceError::InvalidRequest(_)));
    }

    #[test]
    fn test_parse_missing_result_list() {
        let records = EuropePmcSource::parse_search_response(r#"{"hitCount": 0}"#).unwrap();
        assert!(records.is_empty());

        let records =
            EuropePmcSource::parse_search_response(r#"{"resultList": {"result": null}}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"{"hitCount": 2, "resultList": {"result": [{"id": "b"}, {"id": "a"}]}}"#;
        let records = EuropePmcSource::parse_search_response(json).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_null_keywords_keeps_page() {
        let json = r#"{"resultList": {"result": [
            {"id": "1", "keywordList": {"keyword": ["virome"]}},
            {"id": "2", "keywordList": {"keyword": null}}
        ]}}"#;
        let records = EuropePmcSource::parse_search_response(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].keyword_list.as_ref().unwrap().keyword, None);
    }

    #[test]
    fn test_parse_skips_mistyped_record() {
        let json = r#"{"resultList": {"result": [
            {"id": "1", "citationCount": 4},
            {"id": "2", "citationCount": "7"},
            {"id": "3"}
        ]}}"#;
        let records = EuropePmcSource::parse_search_response(json).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_deref().unwrap()).collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = EuropePmcSource::parse_search_response("<html>down</html>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
