//! State/intent/reducer seam.
//!
//! The loader never edits its [`FetchState`](crate::FetchState) in place.
//! Dispatching, settling and aborting each become an intent, and a reducer
//! turns the previous state plus that intent into the next state. The
//! transition table is therefore plain data-in, data-out and is tested
//! without a runtime or a network.

/// Snapshot type a reducer produces.
///
/// Snapshots are cloned out to notifiers and compared in tests; `Default`
/// is the state before anything was requested.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}

/// Event a reducer consumes.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order starting from `state`.
    fn reduce_all(
        state: Self::State,
        intents: impl IntoIterator<Item = Self::Intent>,
    ) -> Self::State {
        intents.into_iter().fold(state, Self::reduce)
    }
}
