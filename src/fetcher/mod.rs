//! Resource fetchers.
//!
//! The loader only knows the [`Fetcher`] trait; `http.rs` provides the
//! JSON-over-HTTP implementation used by the binary.

mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::locator::Locator;

pub use http::HttpFetcher;

/// Performs one fetch for a locator.
///
/// Implementations must not retry on their own; the loader reports the
/// first outcome as-is.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Payload produced by a successful fetch.
    type Output: Clone + PartialEq + Send + Sync + 'static;

    /// Fetch the resource identified by `locator`.
    async fn fetch(&self, locator: &Locator) -> Result<Self::Output, FetchError>;
}
