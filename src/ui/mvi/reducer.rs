//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
///
/// Must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
