//! Search module
//!
//! [`SearchRequest`] couples a query with a target index and accumulates
//! result entries across pages when asked to fetch everything.
//!
//! # Features
//!
//! - **Bounded pagination**: follow `next` links up to the reported total
//!   or the [`MAX_RESULTS`] cap, whichever comes first
//! - **Replace-on-success**: stored results survive a failed execution
//! - **Derived accessors**: request path, counts, and completeness checks

mod request;

pub use request::{SearchRequest, MAX_RESULTS};
