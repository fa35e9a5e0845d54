//! API client module
//!
//! The search logic talks to the service through the [`ApiClient`] trait;
//! [`ElsevierClient`] is the bundled reqwest-backed implementation.
//!
//! # Features
//!
//! - **Injected transport**: two-method trait the page walk is driven through
//! - **Authentication**: API key and optional institutional token headers
//! - **Typed decoding**: responses parsed straight into the envelope types

mod api;
mod http;

pub use api::ApiClient;
pub use http::{ClientConfig, ElsevierClient, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests;
