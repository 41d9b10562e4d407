//! Command-line arguments for the `resource-loader` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::locator::Locator;

/// Fetch JSON resources through an asynchronous loader and print the
/// settled state.
#[derive(Debug, Parser)]
#[command(name = "resource-loader", version, about)]
pub struct Cli {
    /// Search terms, each appended to `source.base_url` and submitted in order
    pub queries: Vec<String>,

    /// Submit a raw URL instead of a search term (repeatable)
    #[arg(long = "url", value_name = "URL", conflicts_with = "queries")]
    pub urls: Vec<String>,

    /// Config file path (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON pointer selecting the payload; "" keeps the whole document
    #[arg(long, value_name = "PTR")]
    pub pointer: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Delay between consecutive submissions in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub interval_ms: u64,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(pointer) = &self.pointer {
            config.source.payload_pointer = pointer.clone();
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }
    }

    /// Locators to submit, in submission order.
    pub fn locators(&self, config: &Config) -> Vec<Locator> {
        if !self.urls.is_empty() {
            return self.urls.iter().map(|u| Locator::new(u.as_str())).collect();
        }

        if self.queries.is_empty() {
            return vec![Locator::joined(
                &config.source.base_url,
                &config.source.default_query,
            )];
        }

        self.queries
            .iter()
            .map(|q| Locator::joined(&config.source.base_url, q))
            .collect()
    }
}
