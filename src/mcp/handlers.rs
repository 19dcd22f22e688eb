//! Tool handlers.

use std::sync::Arc;

use serde_json::Value;

use super::tools::ToolHandler;
use crate::models::{SearchQuery, DEFAULT_MAX_RESULTS};
use crate::search::PaperSearchTool;
use crate::utils::{ProgressNotifier, TracingNotifier};

/// Handler for `search_european_pmc`
#[derive(Clone)]
pub struct SearchEuropePmcHandler {
    tool: PaperSearchTool,
    notifier: Arc<dyn ProgressNotifier>,
}

impl std::fmt::Debug for SearchEuropePmcHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEuropePmcHandler")
            .field("tool", &self.tool)
            .finish_non_exhaustive()
    }
}

impl SearchEuropePmcHandler {
    /// Create a handler that reports progress through tracing
    pub fn new(tool: PaperSearchTool) -> Self {
        Self::with_notifier(tool, Arc::new(TracingNotifier))
    }

    /// Create a handler with a custom progress notifier
    pub fn with_notifier(tool: PaperSearchTool, notifier: Arc<dyn ProgressNotifier>) -> Self {
        Self { tool, notifier }
    }
}

/// Pull `search_query` and `max_results` out of the tool arguments
fn parse_args(args: &Value) -> Result<SearchQuery, String> {
    let query = args
        .get("search_query")
        .and_then(|v| v.as_str())
        .ok_or("Missing 'search_query' parameter")?;

    let max_results = match args.get("max_results") {
        None | Some(Value::Null) => DEFAULT_MAX_RESULTS,
        Some(v) => v
            .as_i64()
            .ok_or("'max_results' must be an integer")?,
    };

    Ok(SearchQuery::new(query).max_results(max_results))
}

#[async_trait::async_trait]
impl ToolHandler for SearchEuropePmcHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let query = parse_args(&args)?;
        let result = self.tool.search(&query, self.notifier.as_ref()).await;

        serde_json::to_value(&result).map_err(|e| format!("Failed to serialize result: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::mock::make_record;
    use crate::sources::MockSource;
    use crate::utils::ChannelNotifier;
    use serde_json::json;

    const ABSTRACT: &str =
        "Phage communities in the human gut shift markedly after antibiotic treatment in adults.";

    fn handler(source: Arc<MockSource>) -> SearchEuropePmcHandler {
        SearchEuropePmcHandler::new(PaperSearchTool::new(source))
    }

    #[test]
    fn test_parse_args_defaults() {
        let query = parse_args(&json!({ "search_query": "phage" })).unwrap();
        assert_eq!(query.query, "phage");
        assert_eq!(query.max_results, 10);

        let query = parse_args(&json!({ "search_query": "phage", "max_results": null })).unwrap();
        assert_eq!(query.max_results, 10);
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(parse_args(&json!({})).is_err());
        assert!(parse_args(&json!({ "search_query": 42 })).is_err());
        assert!(parse_args(&json!({ "search_query": "x", "max_results": "ten" })).is_err());
    }

    #[tokio::test]
    async fn test_execute_returns_result_object() {
        let source = Arc::new(MockSource::with_records(vec![
            make_record("1", "gut phages", Some(ABSTRACT)),
            make_record("2", "no abstract", None),
        ]));

        let value = handler(source)
            .execute(json!({ "search_query": "phage", "max_results": 5 }))
            .await
            .unwrap();

        assert_eq!(value["search_query"], "phage");
        assert_eq!(value["papers"].as_array().unwrap().len(), 1);
        assert_eq!(value["papers"][0]["url"], "https://europepmc.org/article/MED/1");
    }

    #[tokio::test]
    async fn test_execute_reports_api_error_as_data() {
        let source = Arc::new(MockSource::new());
        source.set_api_error("503 Service Unavailable");

        let value = handler(source)
            .execute(json!({ "search_query": "phage" }))
            .await
            .unwrap();

        assert_eq!(value["error"], "API error: 503 Service Unavailable");
        assert_eq!(value["papers"], json!([]));
    }

    #[tokio::test]
    async fn test_execute_uses_custom_notifier() {
        let source = Arc::new(MockSource::new());
        let (notifier, mut rx) = ChannelNotifier::channel();
        let handler =
            SearchEuropePmcHandler::with_notifier(PaperSearchTool::new(source), Arc::new(notifier));

        handler.execute(json!({ "search_query": "phage" })).await.unwrap();

        assert!(rx.try_recv().unwrap().contains("phage"));
    }
}
