//! Fetch state machine.
//!
//! - `state.rs` - phase and view-facing state
//! - `intent.rs` - lifecycle events and fetch outcomes
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchPhase, FetchState};
