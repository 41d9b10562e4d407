//! Reducer for fetch state transitions.

use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::{FetchPhase, FetchState};

/// Reducer for [`FetchState`] transitions.
pub struct FetchReducer<T> {
    _state: PhantomData<fn() -> T>,
}

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Init => FetchState {
                phase: FetchPhase::Loading,
                data: state.data,
                error: None,
            },

            FetchIntent::Success { payload } => FetchState {
                phase: FetchPhase::Success,
                data: Some(payload),
                error: None,
            },

            FetchIntent::Failure { error } => FetchState {
                phase: FetchPhase::Failure,
                data: state.data,
                error: Some(error),
            },

            FetchIntent::Abort => match state.phase {
                FetchPhase::Loading => FetchState {
                    phase: FetchPhase::Idle,
                    ..state
                },
                _ => state,
            },
        }
    }
}
