//! Command-line interface
//!
//! Argument parsing and the runner that executes a search and prints
//! the results.

use crate::client::{ClientConfig, ElsevierClient};
use crate::error::{Error, Result};
use crate::search::SearchRequest;
use clap::Parser;
use serde_json::{json, Value};
use std::time::Instant;

/// Environment variable consulted when `--api-key` is not given
const API_KEY_ENV: &str = "ELSEVIER_API_KEY";

/// Elsevier search CLI
#[derive(Parser, Debug)]
#[command(name = "elsevier-search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Search query, in the target index's query syntax
    pub query: String,

    /// Index to search (scopus, sciencedirect, ...)
    #[arg(short, long, default_value = "scopus")]
    pub index: String,

    /// API key (falls back to the ELSEVIER_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Institutional token sent alongside the API key
    #[arg(long)]
    pub inst_token: Option<String>,

    /// Base URL of the search service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Follow next links until every result is fetched (capped at 5000)
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one entry per line)
    Json,
    /// Human-readable output
    Pretty,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the search and print results
    pub async fn run(&self) -> Result<()> {
        let start = Instant::now();

        let client = ElsevierClient::with_config(self.client_config()?);
        let mut search = SearchRequest::new(self.cli.query.clone(), self.cli.index.clone());
        search.execute(&client, self.cli.all).await?;

        for entry in search.results() {
            self.output_message(entry);
        }

        self.output_message(&json!({
            "type": "SUMMARY",
            "summary": {
                "query": search.query(),
                "index": search.index(),
                "num_results": search.num_results(),
                "total_num_results": search.total_num_results(),
                "complete": search.has_all_results(),
                "duration_ms": start.elapsed().as_millis() as u64,
            }
        }));

        Ok(())
    }

    /// Build the client config from flags and environment
    fn client_config(&self) -> Result<ClientConfig> {
        let api_key = match &self.cli.api_key {
            Some(key) => key.clone(),
            None => std::env::var(API_KEY_ENV).map_err(|_| {
                Error::config(format!(
                    "API key not specified (use --api-key or set {API_KEY_ENV})"
                ))
            })?,
        };

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = &self.cli.base_url {
            config = config.base_url(base_url.clone());
        }
        if let Some(token) = &self.cli.inst_token {
            config = config.inst_token(token.clone());
        }
        Ok(config)
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
