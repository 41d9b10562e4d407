//! Shared test utilities: a scripted fetcher and state helpers.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use resource_loader::{
    AsyncResourceLoader, FetchError, FetchState, Fetcher, Locator, StateNotifier,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};

pub type Outcome = Result<Vec<u32>, FetchError>;

const WAIT: Duration = Duration::from_secs(5);

// -- Scripted fetcher ---------------------------------------------------------

#[derive(Default)]
struct Script {
    pending: HashMap<String, VecDeque<oneshot::Receiver<Outcome>>>,
    calls: Vec<Locator>,
    completed: Vec<Locator>,
}

/// Fetcher whose responses are released by the test, one sender per fetch.
///
/// Clones share the script, so a test keeps one handle after moving another
/// into the loader. A fetch for a locator with nothing scripted answers 404.
#[derive(Clone, Default)]
pub struct ScriptedFetcher {
    script: Arc<Mutex<Script>>,
}

impl ScriptedFetcher {
    /// Script the next fetch of `locator`; its result is whatever gets sent.
    pub fn expect(&self, locator: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.script
            .lock()
            .pending
            .entry(locator.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Locator> {
        self.script.lock().calls.clone()
    }

    pub fn completed(&self) -> Vec<Locator> {
        self.script.lock().completed.clone()
    }

    /// Wait until `n` fetches have started.
    pub async fn wait_calls(&self, n: usize) {
        let script = Arc::clone(&self.script);
        wait_until(move || script.lock().calls.len() >= n).await;
    }

    /// Wait until `n` fetches have returned (and so been settled or dropped).
    pub async fn wait_completed(&self, n: usize) {
        let script = Arc::clone(&self.script);
        wait_until(move || script.lock().completed.len() >= n).await;
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    type Output = Vec<u32>;

    async fn fetch(&self, locator: &Locator) -> Outcome {
        let rx = {
            let mut script = self.script.lock();
            script.calls.push(locator.clone());
            script
                .pending
                .get_mut(locator.as_str())
                .and_then(VecDeque::pop_front)
        };

        let outcome = match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(FetchError::Parse {
                    locator: locator.clone(),
                    message: "script sender dropped".to_string(),
                })
            }),
            None => Err(FetchError::Status {
                locator: locator.clone(),
                status: 404,
            }),
        };

        self.script.lock().completed.push(locator.clone());
        outcome
    }
}

pub fn fail(locator: &str) -> Outcome {
    Err(FetchError::Status {
        locator: Locator::from(locator),
        status: 500,
    })
}

// -- Recording notifier -------------------------------------------------------

/// Keeps every state the loader commits.
pub struct RecordingNotifier<T> {
    states: Arc<Mutex<Vec<FetchState<T>>>>,
}

impl<T> Clone for RecordingNotifier<T> {
    fn clone(&self) -> Self {
        Self {
            states: Arc::clone(&self.states),
        }
    }
}

impl<T> RecordingNotifier<T> {
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> RecordingNotifier<T> {
    pub fn states(&self) -> Vec<FetchState<T>> {
        self.states.lock().clone()
    }
}

impl<T: Clone + Send + Sync> StateNotifier<T> for RecordingNotifier<T> {
    fn notify(&self, state: &FetchState<T>) {
        self.states.lock().push(state.clone());
    }
}

// -- Waiting helpers ----------------------------------------------------------

/// Yield to the runtime until `cond` holds, failing after a few seconds.
pub async fn wait_until(mut cond: impl FnMut() -> bool) {
    tokio::time::timeout(WAIT, async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Wait for the next settled state published on `rx`.
pub async fn wait_settled<T: Clone>(rx: &mut watch::Receiver<FetchState<T>>) -> FetchState<T> {
    tokio::time::timeout(WAIT, rx.wait_for(|s| s.is_settled()))
        .await
        .expect("loader did not settle in time")
        .expect("state channel closed")
        .clone()
}

/// Wait until no fetch task of `loader` is running.
pub async fn drain<F: Fetcher>(loader: &AsyncResourceLoader<F>) {
    wait_until(|| loader.in_flight() == 0).await;
}
