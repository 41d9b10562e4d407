//! Fetch error taxonomy.
//!
//! Fetchers report a [`FetchError`]; the loader never surfaces it directly.
//! Every variant collapses into the `Failure` phase and is carried to the
//! caller as an [`ErrorInfo`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locator::Locator;

/// Errors that can occur while fetching a resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The locator is not something this fetcher can request.
    #[error("Invalid locator '{locator}': {reason}")]
    InvalidLocator { locator: Locator, reason: String },

    /// Transport-level failure (DNS, connect, TLS, reset).
    #[error("Request to '{locator}' failed: {source}")]
    Network {
        locator: Locator,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to '{locator}' returned status {status}")]
    Status { locator: Locator, status: u16 },

    /// No response within the configured request timeout.
    #[error("Request to '{locator}' timed out after {}s", .duration.as_secs())]
    Timeout { locator: Locator, duration: Duration },

    /// Body was not JSON, or did not have the expected shape.
    #[error("Failed to parse response from '{locator}': {message}")]
    Parse { locator: Locator, message: String },
}

impl FetchError {
    /// Stable identifier of the error class.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::InvalidLocator { .. } => "invalid_locator",
            FetchError::Network { .. } => "network_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Parse { .. } => "parse_error",
        }
    }
}

/// Error detail attached to a `Failure` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error class, see [`FetchError::error_type`].
    pub kind: String,
    /// Human-readable description.
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&FetchError> for ErrorInfo {
    fn from(err: &FetchError) -> Self {
        Self::new(err.error_type(), err.to_string())
    }
}

impl From<FetchError> for ErrorInfo {
    fn from(err: FetchError) -> Self {
        Self::from(&err)
    }
}
