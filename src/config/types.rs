use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Where search queries are sent and what part of the answer is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Prefix every query is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query used when none is given on the command line.
    #[serde(default = "default_query")]
    pub default_query: String,
    /// JSON pointer selecting the payload, e.g. "/hits". Empty keeps the
    /// whole document.
    #[serde(default = "default_payload_pointer")]
    pub payload_pointer: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("resource-loader/{}", env!("CARGO_PKG_VERSION"))
}

fn default_base_url() -> String {
    "https://hn.algolia.com/api/v1/search?query=".to_string()
}

fn default_query() -> String {
    "redux".to_string()
}

fn default_payload_pointer() -> String {
    "/hits".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_query: default_query(),
            payload_pointer: default_payload_pointer(),
        }
    }
}

impl SourceConfig {
    /// The payload pointer, or `None` when the whole document is wanted.
    pub fn pointer(&self) -> Option<&str> {
        if self.payload_pointer.is_empty() {
            None
        } else {
            Some(&self.payload_pointer)
        }
    }
}
