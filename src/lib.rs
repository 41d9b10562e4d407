//! Asynchronous resource loading with stale-response rejection.
//!
//! [`AsyncResourceLoader`] fetches whatever its active [`Locator`] points
//! at and exposes a [`FetchState`] (`Idle`, `Loading`, `Success`,
//! `Failure`) to an external view layer. Changing the locator re-fetches;
//! results that belong to a superseded request are dropped.
//!
//! ```no_run
//! use resource_loader::{AsyncResourceLoader, HttpConfig, HttpFetcher, WatchNotifier};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = HttpFetcher::<serde_json::Value>::new(&HttpConfig::default())?
//!     .with_payload_pointer("/hits");
//! let (notifier, mut rx) = WatchNotifier::channel();
//! let loader = AsyncResourceLoader::new(fetcher).with_notifier(notifier);
//!
//! loader.start();
//! loader.submit("https://hn.algolia.com/api/v1/search?query=redux");
//! let settled = rx.wait_for(|s| s.is_settled()).await?.clone();
//! println!("{:?}", settled.phase);
//! loader.stop();
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod loader;
pub mod locator;
pub mod logging;
pub mod mvi;
pub mod notifier;

pub use config::{Config, ConfigError, HttpConfig, SourceConfig};
pub use error::{ErrorInfo, FetchError};
pub use fetch::{FetchIntent, FetchPhase, FetchReducer, FetchState};
pub use fetcher::{Fetcher, HttpFetcher};
pub use loader::{AsyncResourceLoader, RequestToken, Submission};
pub use locator::Locator;
pub use notifier::{NoopNotifier, StateNotifier, WatchNotifier};
