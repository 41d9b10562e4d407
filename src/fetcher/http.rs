use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::FetchError;
use crate::locator::Locator;

use super::Fetcher;

/// Plain HTTP GET returning JSON, decoded into `T`.
///
/// When a payload pointer is set (RFC 6901, e.g. `/hits`) only that part of
/// the response document is decoded.
pub struct HttpFetcher<T = Value> {
    client: Client,
    request_timeout: Duration,
    payload_pointer: Option<String>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> HttpFetcher<T> {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            request_timeout: Duration::from_secs(config.timeout_seconds),
            payload_pointer: None,
            _payload: PhantomData,
        })
    }

    /// Decode only the value at `pointer` instead of the whole document.
    pub fn with_payload_pointer(mut self, pointer: impl Into<String>) -> Self {
        self.payload_pointer = Some(pointer.into());
        self
    }

    async fn do_fetch(&self, locator: &Locator, url: Url) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                locator: locator.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                locator: locator.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            locator: locator.clone(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse {
            locator: locator.clone(),
            message: e.to_string(),
        })
    }

    fn select_payload(&self, locator: &Locator, document: Value) -> Result<Value, FetchError> {
        let Some(pointer) = self.payload_pointer.as_deref() else {
            return Ok(document);
        };

        let mut document = document;
        document
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| FetchError::Parse {
                locator: locator.clone(),
                message: format!("no value at '{}'", pointer),
            })
    }
}

#[async_trait]
impl<T> Fetcher for HttpFetcher<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static,
{
    type Output = T;

    async fn fetch(&self, locator: &Locator) -> Result<T, FetchError> {
        let url = Url::parse(locator.as_str()).map_err(|e| FetchError::InvalidLocator {
            locator: locator.clone(),
            reason: e.to_string(),
        })?;

        debug!(%locator, "GET");

        let document = match timeout(self.request_timeout, self.do_fetch(locator, url)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(%locator, timeout_secs = self.request_timeout.as_secs(), "request timed out");
                return Err(FetchError::Timeout {
                    locator: locator.clone(),
                    duration: self.request_timeout,
                });
            }
        };

        let payload = self.select_payload(locator, document)?;

        serde_json::from_value(payload).map_err(|e| FetchError::Parse {
            locator: locator.clone(),
            message: e.to_string(),
        })
    }
}
