//! State change notification.
//!
//! The loader owns no view; whoever renders the state injects a
//! [`StateNotifier`] and is told about every committed transition.

use tokio::sync::watch;

use crate::fetch::FetchState;

/// Receives every state the loader commits, in commit order.
///
/// Called while the loader's state lock is held. Implementations must be
/// quick and must not call back into the loader.
pub trait StateNotifier<T>: Send + Sync {
    fn notify(&self, state: &FetchState<T>);
}

/// Discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl<T> StateNotifier<T> for NoopNotifier {
    fn notify(&self, _state: &FetchState<T>) {}
}

/// Publishes the latest state into a `tokio::sync::watch` channel.
///
/// Slow receivers only observe the most recent state.
pub struct WatchNotifier<T> {
    tx: watch::Sender<FetchState<T>>,
}

impl<T: Clone + Send + Sync> WatchNotifier<T> {
    /// Create a notifier and the receiver the view layer listens on.
    ///
    /// The channel starts at the default state; the loader publishes its
    /// actual state as soon as the notifier is installed.
    pub fn channel() -> (Self, watch::Receiver<FetchState<T>>) {
        let (tx, rx) = watch::channel(FetchState::default());
        (Self { tx }, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Send + Sync> StateNotifier<T> for WatchNotifier<T> {
    fn notify(&self, state: &FetchState<T>) {
        // send_replace never fails, even with no receivers left
        self.tx.send_replace(state.clone());
    }
}
