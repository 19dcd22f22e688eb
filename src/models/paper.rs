//! Paper models: the raw Europe PMC record and the normalized paper returned to callers.

use serde::{Deserialize, Serialize};

/// Base URL for human-readable Europe PMC article pages
pub const ARTICLE_BASE_URL: &str = "https://europepmc.org/article";

/// Source code used in article URLs when a record carries none
pub const DEFAULT_SOURCE: &str = "MED";

/// Minimum trimmed abstract length (in characters) for a record to qualify
pub const MIN_ABSTRACT_CHARS: usize = 50;

const DEFAULT_ID: &str = "N/A";
const DEFAULT_TITLE: &str = "No title";
const DEFAULT_AUTHORS: &str = "No author information";

/// A single search hit as returned by the Europe PMC REST API (`resultType=core`).
///
/// Field names mirror the API and every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_string: Option<String>,
    #[serde(default)]
    pub journal_title: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub keyword_list: Option<KeywordList>,
    #[serde(default)]
    pub pmid: Option<String>,
    #[serde(default)]
    pub citation_count: Option<u64>,
}

/// `keywordList` wrapper object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordList {
    #[serde(default)]
    pub keyword: Option<Vec<String>>,
}

impl RawRecord {
    /// Returns the abstract if it is long enough to be worth returning.
    ///
    /// The length check runs on the trimmed text, but the abstract itself is
    /// handed back untouched.
    pub fn qualifying_abstract(&self) -> Option<&str> {
        self.abstract_text
            .as_deref()
            .filter(|text| text.trim().chars().count() >= MIN_ABSTRACT_CHARS)
    }

    /// Europe PMC page for this record, if it has an id
    pub fn article_url(&self) -> Option<String> {
        self.id.as_deref().map(|id| {
            let source = self.source.as_deref().unwrap_or(DEFAULT_SOURCE);
            format!("{}/{}/{}", ARTICLE_BASE_URL, source, id)
        })
    }
}

/// A normalized paper returned by the `search_european_pmc` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Europe PMC identifier ("N/A" when the API omits it)
    pub id: String,

    /// Paper title
    pub title: String,

    /// Author list as a single display string
    pub authors: String,

    /// Journal title
    pub journal: Option<String>,

    /// First publication date, verbatim from the API
    pub publication_date: Option<String>,

    /// Abstract text
    pub r#abstract: String,

    /// Digital Object Identifier
    pub doi: Option<String>,

    /// Europe PMC article page
    pub url: Option<String>,

    /// Author keywords
    pub keywords: Vec<String>,

    /// PubMed identifier
    pub pmid: Option<String>,

    /// Citation count
    #[serde(rename = "citationCount")]
    pub citation_count: u64,
}

impl PaperRecord {
    /// Normalize a raw record.
    ///
    /// Returns `None` when the record has no qualifying abstract.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let r#abstract = raw.qualifying_abstract()?.to_string();

        Some(Self {
            id: raw.id.clone().unwrap_or_else(|| DEFAULT_ID.to_string()),
            title: raw.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            authors: raw
                .author_string
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHORS.to_string()),
            journal: raw.journal_title.clone(),
            publication_date: raw.first_publication_date.clone(),
            r#abstract,
            doi: raw.doi.clone(),
            url: raw.article_url(),
            keywords: raw
                .keyword_list
                .as_ref()
                .and_then(|list| list.keyword.clone())
                .unwrap_or_default(),
            pmid: raw.pmid.clone(),
            citation_count: raw.citation_count.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LONG_ABSTRACT: &str =
        "Viral metagenomics reveals a large diversity of previously unknown viruses in soil.";

    fn raw(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_article_url_uses_record_source() {
        let record = raw(json!({ "id": "12345", "source": "PMC" }));
        assert_eq!(
            record.article_url().as_deref(),
            Some("https://europepmc.org/article/PMC/12345")
        );
    }

    #[test]
    fn test_article_url_defaults_to_med() {
        let record = raw(json!({ "id": "999" }));
        assert_eq!(
            record.article_url().as_deref(),
            Some("https://europepmc.org/article/MED/999")
        );
    }

    #[test]
    fn test_article_url_requires_id() {
        let record = raw(json!({ "source": "PMC" }));
        assert!(record.article_url().is_none());
    }

    #[test]
    fn test_short_abstract_does_not_qualify() {
        let padded = format!("   {}   ", "x".repeat(49));
        let record = raw(json!({ "abstractText": padded }));
        assert!(record.qualifying_abstract().is_none());

        let exact = raw(json!({ "abstractText": "x".repeat(50) }));
        assert!(exact.qualifying_abstract().is_some());
    }

    #[test]
    fn test_from_raw_applies_defaults() {
        let record = raw(json!({ "abstractText": LONG_ABSTRACT }));
        let paper = PaperRecord::from_raw(&record).unwrap();

        assert_eq!(paper.id, "N/A");
        assert_eq!(paper.title, "No title");
        assert_eq!(paper.authors, "No author information");
        assert_eq!(paper.url, None);
        assert!(paper.keywords.is_empty());
        assert_eq!(paper.citation_count, 0);
    }

    #[test]
    fn test_null_keywords_become_empty() {
        let record = raw(json!({
            "id": "1",
            "abstractText": LONG_ABSTRACT,
            "keywordList": { "keyword": null }
        }));
        let paper = PaperRecord::from_raw(&record).unwrap();
        assert!(paper.keywords.is_empty());

        let record = raw(json!({ "abstractText": LONG_ABSTRACT, "keywordList": null }));
        assert!(PaperRecord::from_raw(&record).unwrap().keywords.is_empty());
    }

    #[test]
    fn test_from_raw_maps_all_fields() {
        let record = raw(json!({
            "id": "36912345",
            "source": "MED",
            "pmid": "36912345",
            "title": "Soil viromes",
            "authorString": "Doe J, Roe R.",
            "journalTitle": "Microbiome",
            "firstPublicationDate": "2023-03-13",
            "abstractText": LONG_ABSTRACT,
            "doi": "10.1186/s40168-023-01234-5",
            "keywordList": { "keyword": ["virome", "soil"] },
            "citationCount": 7,
            "isOpenAccess": "Y"
        }));
        let paper = PaperRecord::from_raw(&record).unwrap();

        assert_eq!(paper.title, "Soil viromes");
        assert_eq!(paper.authors, "Doe J, Roe R.");
        assert_eq!(paper.journal.as_deref(), Some("Microbiome"));
        assert_eq!(paper.publication_date.as_deref(), Some("2023-03-13"));
        assert_eq!(paper.keywords, vec!["virome", "soil"]);
        assert_eq!(paper.citation_count, 7);
        assert_eq!(
            paper.url.as_deref(),
            Some("https://europepmc.org/article/MED/36912345")
        );
    }

    #[test]
    fn test_paper_serializes_with_wire_names() {
        let record = raw(json!({ "id": "1", "abstractText": LONG_ABSTRACT, "citationCount": 3 }));
        let value = serde_json::to_value(PaperRecord::from_raw(&record).unwrap()).unwrap();

        assert_eq!(value["abstract"], LONG_ABSTRACT);
        assert_eq!(value["citationCount"], 3);
        assert!(value["journal"].is_null());
        assert!(value.get("publication_date").is_some());
    }
}
