//! Intents for the fetch state machine.

use crate::error::ErrorInfo;
use crate::mvi::Intent;

/// Events that drive [`FetchState`](super::FetchState) transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchIntent<T> {
    /// A fetch for the active locator was dispatched.
    Init,

    /// The current fetch produced a payload.
    Success {
        /// Decoded payload.
        payload: T,
    },

    /// The current fetch failed.
    Failure {
        /// Error detail for the view layer.
        error: ErrorInfo,
    },

    /// The loader was stopped while a fetch was in flight.
    Abort,
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
