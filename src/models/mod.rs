//! Core data models for paper search.

mod paper;
mod search;

pub use paper::{
    KeywordList, PaperRecord, RawRecord, ARTICLE_BASE_URL, DEFAULT_SOURCE, MIN_ABSTRACT_CHARS,
};
pub use search::{SearchQuery, SearchResult, DEFAULT_MAX_RESULTS, OVER_FETCH};
