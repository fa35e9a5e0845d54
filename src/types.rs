//! Wire types for the search response envelope
//!
//! The service wraps every search response in an OpenSearch-style envelope.
//! Field names follow the wire format (`search-results`, `@ref`, `@href`);
//! serde renames map them onto Rust identifiers.

use serde::Deserialize;
use serde_json::Value;

/// Top-level wrapper around a page of search results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    /// The single payload object every response carries
    #[serde(rename = "search-results")]
    pub search_results: SearchResults,
}

/// One page of search results
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Total number of matches in the index, string-encoded on the wire
    #[serde(rename = "opensearch:totalResults")]
    pub total_results: String,

    /// Result entries for this page, kept as raw JSON objects
    pub entry: Vec<Value>,

    /// Related-page links; terminal pages may omit the list entirely
    #[serde(default)]
    pub link: Vec<ResultLink>,
}

impl SearchResults {
    /// URL of the follow-up page, when this page carries a `next` link
    pub fn next_link(&self) -> Option<&str> {
        self.link
            .iter()
            .find(|l| l.rel == "next")
            .map(|l| l.href.as_str())
    }
}

/// A relation/URL pair pointing at a related page of the result set
#[derive(Debug, Clone, Deserialize)]
pub struct ResultLink {
    /// Relation tag (`first`, `next`, `last`, ...)
    #[serde(rename = "@ref")]
    pub rel: String,

    /// Absolute URL of the related page
    #[serde(rename = "@href")]
    pub href: String,
}
