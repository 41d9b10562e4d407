//! Asynchronous resource loader.
//!
//! Holds the active locator and the [`FetchState`] for it. Every accepted
//! locator change dispatches one fetch on the tokio runtime, tagged with a
//! fresh [`RequestToken`]. When the fetch finishes its result is applied
//! only if that token is still current, so a slow response for a locator
//! that has since been replaced can never overwrite newer state.
//!
//! # Lifecycle
//!
//! A loader starts stopped. `start()` begins dispatching, `stop()`
//! invalidates the current token and aborts in-flight fetches. Both are
//! idempotent and are meant to be driven by the owning view.
//!
//! # Runtime
//!
//! Fetches run on the tokio runtime the loader was created in (or the one
//! given to [`with_runtime`](AsyncResourceLoader::with_runtime)), so a view
//! may call `submit` from a thread that is not part of any runtime. With no
//! runtime reachable at all, `submit` returns [`Submission::Unscheduled`]
//! and leaves the state untouched.

mod token;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::{ErrorInfo, FetchError};
use crate::fetch::{FetchIntent, FetchReducer, FetchState};
use crate::fetcher::Fetcher;
use crate::locator::Locator;
use crate::mvi::Reducer;
use crate::notifier::{NoopNotifier, StateNotifier};

use self::token::TokenIssuer;
pub use self::token::RequestToken;

/// Outcome of [`AsyncResourceLoader::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A fetch was dispatched under this token.
    Scheduled(RequestToken),
    /// The locator equals the active one; nothing happened.
    Unchanged,
    /// The loader is stopped; the locator is fetched on `start()`.
    Deferred,
    /// No tokio runtime was reachable. The locator is recorded and fetched
    /// by the next `submit` of it (or `start()`) that can reach one.
    Unscheduled,
}

struct Shared<T> {
    state: FetchState<T>,
    active: Option<Locator>,
    current: Option<RequestToken>,
    issuer: TokenIssuer,
    running: bool,
    /// Active locator has not been fetched, or its fetch was aborted.
    needs_fetch: bool,
    tasks: Vec<JoinHandle<()>>,
}

impl<T: Clone + PartialEq + Send + 'static> Shared<T> {
    fn apply(&mut self, intent: FetchIntent<T>, notifier: &dyn StateNotifier<T>) {
        let state = std::mem::take(&mut self.state);
        self.state = FetchReducer::<T>::reduce(state, intent);
        notifier.notify(&self.state);
    }

    fn prune_tasks(&mut self) {
        self.tasks.retain(|task| !task.is_finished());
    }
}

/// Fetches the resource behind the active locator and tracks its state.
pub struct AsyncResourceLoader<F: Fetcher> {
    fetcher: Arc<F>,
    notifier: Arc<dyn StateNotifier<F::Output>>,
    shared: Arc<Mutex<Shared<F::Output>>>,
    runtime: Option<Handle>,
}

impl<F: Fetcher> AsyncResourceLoader<F> {
    /// Create a stopped loader in the `Idle` phase with no active locator.
    pub fn new(fetcher: F) -> Self {
        let shared = Shared {
            state: FetchState::default(),
            active: None,
            current: None,
            issuer: TokenIssuer::default(),
            running: false,
            needs_fetch: false,
            tasks: Vec::new(),
        };

        Self {
            fetcher: Arc::new(fetcher),
            notifier: Arc::new(NoopNotifier),
            shared: Arc::new(Mutex::new(shared)),
            runtime: Handle::try_current().ok(),
        }
    }

    /// Install the notifier and publish the current state to it.
    pub fn with_notifier(mut self, notifier: impl StateNotifier<F::Output> + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self.notifier.notify(&self.shared.lock().state);
        self
    }

    /// Seed the `Idle` state with data shown before the first fetch lands.
    pub fn with_initial_data(self, data: F::Output) -> Self {
        {
            let mut shared = self.shared.lock();
            shared.state = FetchState::with_data(data);
            self.notifier.notify(&shared.state);
        }
        self
    }

    /// Run fetches on `runtime` instead of the one current at construction.
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Locator fetched as soon as the loader is started.
    pub fn with_initial_locator(self, locator: impl Into<Locator>) -> Self {
        {
            let mut shared = self.shared.lock();
            shared.active = Some(locator.into());
            shared.needs_fetch = true;
        }
        self
    }

    /// Begin dispatching fetches.
    ///
    /// Fetches the active locator if it was submitted while stopped or its
    /// previous fetch was interrupted by [`stop`](Self::stop).
    pub fn start(&self) {
        let mut shared = self.shared.lock();
        if shared.running {
            return;
        }
        shared.running = true;
        info!(active = ?shared.active.as_ref().map(Locator::as_str), "loader started");

        if shared.needs_fetch {
            if let Some(locator) = shared.active.clone() {
                let _ = self.dispatch(&mut shared, locator);
            }
        }
    }

    /// Stop dispatching and abandon in-flight fetches.
    ///
    /// A `Loading` state falls back to `Idle` and the active locator is
    /// fetched again on the next [`start`](Self::start).
    pub fn stop(&self) {
        let mut shared = self.shared.lock();
        if !shared.running {
            return;
        }
        shared.running = false;

        if shared.current.take().is_some() && shared.state.is_loading() {
            shared.needs_fetch = true;
            shared.apply(FetchIntent::Abort, self.notifier.as_ref());
        }

        let aborted = shared.tasks.len();
        for task in shared.tasks.drain(..) {
            task.abort();
        }
        info!(aborted, "loader stopped");
    }

    /// Make `locator` the active resource.
    pub fn submit(&self, locator: impl Into<Locator>) -> Submission {
        let locator = locator.into();
        let mut shared = self.shared.lock();

        if shared.active.as_ref() == Some(&locator) && !shared.needs_fetch {
            debug!(%locator, "locator unchanged");
            return Submission::Unchanged;
        }

        shared.active = Some(locator.clone());

        if !shared.running {
            // a fetch in flight for the previous locator is already aborted
            shared.needs_fetch = true;
            debug!(%locator, "loader stopped, deferring fetch");
            return Submission::Deferred;
        }

        match self.dispatch(&mut shared, locator) {
            Some(token) => Submission::Scheduled(token),
            None => Submission::Unscheduled,
        }
    }

    pub fn state(&self) -> FetchState<F::Output> {
        self.shared.lock().state.clone()
    }

    pub fn active_locator(&self) -> Option<Locator> {
        self.shared.lock().active.clone()
    }

    /// Token whose result the loader will accept, if any.
    pub fn current_token(&self) -> Option<RequestToken> {
        self.shared.lock().current
    }

    /// Number of fetch tasks still running, superseded ones included.
    pub fn in_flight(&self) -> usize {
        let mut shared = self.shared.lock();
        shared.prune_tasks();
        shared.tasks.len()
    }

    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    /// Spawn a fetch for `locator` and, once it is spawned, make it current.
    ///
    /// Returns `None` without touching the state when no runtime is
    /// reachable; the locator then stays marked as needing a fetch.
    fn dispatch(&self, shared: &mut Shared<F::Output>, locator: Locator) -> Option<RequestToken> {
        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!(%locator, "no tokio runtime reachable, fetch not dispatched");
            shared.needs_fetch = true;
            return None;
        };

        let token = shared.issuer.issue();
        debug!(%locator, %token, "dispatching fetch");

        let fetcher = Arc::clone(&self.fetcher);
        let notifier = Arc::clone(&self.notifier);
        let shared_ref = Arc::clone(&self.shared);
        // settle() takes the lock we hold, so the task cannot land before
        // the token below is current
        let task = runtime.spawn(async move {
            let result = fetcher.fetch(&locator).await;
            settle(&shared_ref, notifier.as_ref(), token, &locator, result);
        });

        shared.current = Some(token);
        shared.needs_fetch = false;
        shared.apply(FetchIntent::Init, self.notifier.as_ref());
        shared.prune_tasks();
        shared.tasks.push(task);

        Some(token)
    }
}

impl<F: Fetcher> Drop for AsyncResourceLoader<F> {
    fn drop(&mut self) {
        for task in self.shared.lock().tasks.drain(..) {
            task.abort();
        }
    }
}

fn settle<T: Clone + PartialEq + Send + 'static>(
    shared: &Mutex<Shared<T>>,
    notifier: &dyn StateNotifier<T>,
    token: RequestToken,
    locator: &Locator,
    result: Result<T, FetchError>,
) {
    let mut shared = shared.lock();

    if shared.current != Some(token) {
        debug!(%locator, %token, current = ?shared.current, "dropping stale response");
        return;
    }

    let intent = match result {
        Ok(payload) => {
            debug!(%locator, %token, "fetch succeeded");
            FetchIntent::Success { payload }
        }
        Err(err) => {
            warn!(%locator, %token, error = %err, "fetch failed");
            FetchIntent::Failure {
                error: ErrorInfo::from(&err),
            }
        }
    };

    shared.apply(intent, notifier);
}
