// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! # Elsevier Search
//!
//! Client for the search APIs exposed at `api.elsevier.com` (Scopus,
//! ScienceDirect, ...). A [`SearchRequest`] couples a query with a target
//! index; executing it fetches one page of results, or walks the
//! response's `next` links until every match has been accumulated, capped
//! at [`MAX_RESULTS`] entries.
//!
//! ## Features
//!
//! - **Bounded Pagination**: Follow `next` links up to the reported total
//!   or the 5000-result cap, whichever comes first
//! - **Injected Transport**: Search logic drives the [`ApiClient`] trait,
//!   so it runs against the bundled [`ElsevierClient`] or any stub
//! - **Typed Envelope**: OpenSearch-style response wrapper decoded with serde
//! - **Authentication**: API key and optional institutional token headers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use elsevier_search::{ElsevierClient, Result, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ElsevierClient::new("my-api-key");
//!
//!     // Fetch every result for the query, not just the first page
//!     let mut search = SearchRequest::new("AUTHLASTNAME(einstein)", "scopus");
//!     search.execute(&client, true).await?;
//!
//!     println!(
//!         "{} of {} results",
//!         search.num_results(),
//!         search.total_num_results()
//!     );
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the search client
pub mod error;

/// Wire types for the search response envelope
pub mod types;

/// API client trait and bundled reqwest implementation
pub mod client;

/// Search requests and the page-walking execute loop
pub mod search;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{ApiClient, ClientConfig, ElsevierClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use search::{SearchRequest, MAX_RESULTS};
pub use types::{ResultLink, SearchEnvelope, SearchResults};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
