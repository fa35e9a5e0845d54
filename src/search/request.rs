//! Search request object and its page-walking execute loop

use crate::client::ApiClient;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Path prefix shared by all search endpoints; the index label is appended
const SEARCH_PATH: &str = "content/search/";

/// Hard cap on the number of results a single search will accumulate,
/// regardless of how many the index reports
pub const MAX_RESULTS: usize = 5000;

/// A search against one of the indexes exposed by the service.
///
/// Couples a query string with a target index (`scopus`, `sciencedirect`,
/// ...) and stores the entries fetched by [`execute`](Self::execute). The
/// query and index can be changed between executions; each successful
/// execution replaces the stored results wholesale.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    query: String,
    index: String,
    results: Vec<Value>,
    total_num_results: u64,
}

impl SearchRequest {
    /// Create a search for `query` against the index labelled `index`
    pub fn new(query: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            index: index.into(),
            results: Vec::new(),
            total_num_results: 0,
        }
    }

    /// The search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the search query; takes effect on the next [`execute`](Self::execute)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The label of the index targeted by the search
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Set the target index; takes effect on the next [`execute`](Self::execute)
    pub fn set_index(&mut self, index: impl Into<String>) {
        self.index = index.into();
    }

    /// Request path for the search, derived from the current index label
    pub fn uri(&self) -> String {
        format!("{SEARCH_PATH}{}", self.index)
    }

    /// The entries fetched by the last successful [`execute`](Self::execute)
    pub fn results(&self) -> &[Value] {
        &self.results
    }

    /// Number of results stored in the search object. This can be smaller
    /// than the number of results that exist in the index for the query.
    pub fn num_results(&self) -> usize {
        self.results.len()
    }

    /// Total number of results that exist in the index for this query.
    /// This can be larger than what the search object will ever store,
    /// since the fetch stops at [`MAX_RESULTS`].
    pub fn total_num_results(&self) -> u64 {
        self.total_num_results
    }

    /// Whether the stored results cover everything the index reported.
    ///
    /// Exact equality, so this stays `false` when the result cap cut the
    /// fetch short, and trivially `true` before the first execution (zero
    /// of zero).
    pub fn has_all_results(&self) -> bool {
        self.results.len() as u64 == self.total_num_results
    }

    /// Execute the search through `client`.
    ///
    /// With `get_all` unset this stores the service's default first page of
    /// results. With `get_all` set, follow-up pages are fetched through each
    /// envelope's `next` link until the accumulated count reaches the
    /// reported total or [`MAX_RESULTS`], whichever comes first. A page
    /// that carries no `next` link while results remain stops the walk with
    /// what was accumulated so far.
    ///
    /// Stored results and the total count are replaced on success; on
    /// error the previous state is left untouched.
    pub async fn execute(&mut self, client: &dyn ApiClient, get_all: bool) -> Result<()> {
        let params = HashMap::from([("query".to_string(), self.query.clone())]);
        let mut envelope = client.execute_with_params(&self.uri(), &params).await?;

        let total = parse_total(&envelope.search_results.total_results)?;
        let mut results = std::mem::take(&mut envelope.search_results.entry);
        debug!(
            "page 1: {} of {} results from '{}'",
            results.len(),
            total,
            self.index
        );

        if get_all {
            let mut page = 1usize;
            while (results.len() as u64) < total && results.len() < MAX_RESULTS {
                let Some(next) = envelope.search_results.next_link().map(str::to_owned) else {
                    warn!(
                        "no next link after {} of {} results; stopping early",
                        results.len(),
                        total
                    );
                    break;
                };

                envelope = client.execute(&next).await?;
                results.append(&mut envelope.search_results.entry);

                page += 1;
                debug!("page {page}: {} of {} results", results.len(), total);
            }
        }

        // The cap bounds the stored set, not just the walk; the last page
        // fetched can overshoot it.
        if results.len() > MAX_RESULTS {
            results.truncate(MAX_RESULTS);
        }

        debug!(
            "search complete: stored {} of {} results for '{}'",
            results.len(),
            total,
            self.index
        );
        self.total_num_results = total;
        self.results = results;
        Ok(())
    }
}

/// Parse the wire's string-encoded total into a count
fn parse_total(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| Error::decode(format!("opensearch:totalResults is not an integer: {raw:?}")))
}
