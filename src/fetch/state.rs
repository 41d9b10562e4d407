//! State exposed by the loader.

use serde::Serialize;

use crate::error::ErrorInfo;
use crate::mvi::ViewState;

/// Lifecycle phase of the current resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    /// Nothing requested yet, or the last fetch was aborted.
    #[default]
    Idle,
    /// A fetch for the active locator is in flight.
    Loading,
    /// The last fetch for the active locator produced data.
    Success,
    /// The last fetch for the active locator failed.
    Failure,
}

/// Display-agnostic snapshot handed to the view layer.
///
/// `data` survives `Loading` and `Failure`, so a view can keep showing the
/// previous result while a new one loads or after it fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState<T> {
    pub phase: FetchPhase,
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            phase: FetchPhase::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> ViewState for FetchState<T> {}

impl<T> FetchState<T> {
    /// Idle state pre-populated with `data`.
    pub fn with_data(data: T) -> Self {
        Self {
            phase: FetchPhase::Idle,
            data: Some(data),
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn is_error(&self) -> bool {
        self.phase == FetchPhase::Failure
    }

    /// True once the last fetch finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, FetchPhase::Success | FetchPhase::Failure)
    }
}
