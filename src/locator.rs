//! Resource locators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of the resource to fetch, usually a URL.
///
/// Two locators are the same resource exactly when their strings are equal.
/// No normalisation happens here; fetchers decide what a locator means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build a locator by appending `suffix` to `base` verbatim.
    ///
    /// Used for search endpoints of the form `...?query=` + term.
    pub fn joined(base: &str, suffix: &str) -> Self {
        Self(format!("{}{}", base, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
