//! Reducer traits for MVI architecture.

use crate::random::RandomSource;

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer whose transitions may consume random draws.
///
/// Same contract as [`Reducer`], except the caller supplies the
/// randomness. Intents stay payload-free for random steps, and tests can
/// pass a fixed source to pin the outcome.
pub trait RandomReducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// Deterministic for a given state, intent, and sequence of draws.
    fn reduce(state: Self::State, intent: Self::Intent, random: &mut dyn RandomSource)
        -> Self::State;
}
