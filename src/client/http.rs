//! Reqwest-backed client for the search service
//!
//! Provides a thin HTTP client that handles:
//! - API key and institutional token headers
//! - Request execution against a relative path or an absolute page URL
//! - Response envelope decoding
//!
//! Retries and rate limiting are left to callers that need them.

use super::api::ApiClient;
use crate::error::{Error, Result};
use crate::types::SearchEnvelope;
use async_trait::async_trait;
use reqwest::header;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default service root all relative request paths are joined onto
pub const DEFAULT_BASE_URL: &str = "https://api.elsevier.com/";

const API_KEY_HEADER: &str = "X-ELS-APIKey";
const INST_TOKEN_HEADER: &str = "X-ELS-Insttoken";

/// Configuration for [`ElsevierClient`]
#[derive(Clone)]
pub struct ClientConfig {
    /// Service root all relative request paths are joined onto
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Institutional token sent alongside the API key, when set
    pub inst_token: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for the rest
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            inst_token: None,
            user_agent: format!("elsevier-search/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the service root
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the institutional token
    #[must_use]
    pub fn inst_token(mut self, token: impl Into<String>) -> Self {
        self.inst_token = Some(token.into());
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authenticated HTTP client for the search service
pub struct ElsevierClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ElsevierClient {
    /// Create a client with the given API key and default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Parse the configured service root, normalized to end with a slash
    /// so joining a relative path appends instead of replacing
    fn base(&self) -> Result<Url> {
        let raw = &self.config.base_url;
        if raw.ends_with('/') {
            Ok(Url::parse(raw)?)
        } else {
            Ok(Url::parse(&format!("{raw}/"))?)
        }
    }

    async fn get(&self, url: Url, params: Option<&HashMap<String, String>>) -> Result<SearchEnvelope> {
        let mut req = self.client.get(url.clone());

        if let Some(params) = params {
            req = req.query(params);
        }

        req = req
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.config.inst_token {
            req = req.header(INST_TOKEN_HEADER, token);
        }

        let response = req.send().await?;
        let status = response.status();
        debug!("GET {} -> {}", url, status.as_u16());

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ApiClient for ElsevierClient {
    async fn execute_with_params(
        &self,
        path: &str,
        params: &HashMap<String, String>,
    ) -> Result<SearchEnvelope> {
        let url = self.base()?.join(path)?;
        self.get(url, Some(params)).await
    }

    async fn execute(&self, url: &str) -> Result<SearchEnvelope> {
        self.get(Url::parse(url)?, None).await
    }
}

impl std::fmt::Debug for ElsevierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElsevierClient")
            .field("base_url", &self.config.base_url)
            .field("has_inst_token", &self.config.inst_token.is_some())
            .finish_non_exhaustive()
    }
}
