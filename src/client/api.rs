//! The collaborator contract between search logic and HTTP transport

use crate::error::Result;
use crate::types::SearchEnvelope;
use async_trait::async_trait;
use std::collections::HashMap;

/// Capability to issue authenticated requests against the search service.
///
/// [`SearchRequest::execute`](crate::SearchRequest::execute) drives its page
/// walk entirely through this trait, so the bundled
/// [`ElsevierClient`](crate::ElsevierClient) and in-memory test stubs are
/// interchangeable.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue a request against `path`, relative to the service root, with
    /// the given query parameters, and decode the response envelope.
    async fn execute_with_params(
        &self,
        path: &str,
        params: &HashMap<String, String>,
    ) -> Result<SearchEnvelope>;

    /// Issue a request against an absolute URL, as handed out in a `next`
    /// link, and decode the response envelope.
    async fn execute(&self, url: &str) -> Result<SearchEnvelope>;
}
