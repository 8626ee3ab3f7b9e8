//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and return the next one.
    ///
    /// Every returned state must satisfy the page's invariants; intents
    /// that would break them are ignored and the input state is returned.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
