//! Model-View-Intent primitives for the screen layer.
//!
//! Unidirectional data flow: an intent (user action) goes through a
//! reducer, a pure function from state and intent to the next state,
//! and views render from state alone. Side effects (committing to the
//! session store, navigating) happen in [`crate::ui::app::App`] after
//! the reducer has run, never inside it.

/// Marker trait for intent objects: user actions the reducer consumes.
pub trait Intent: Send + 'static {}

/// Marker trait for screen state objects.
///
/// State is self-contained (everything the view needs) and comparable,
/// so a render pass can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Transforms state based on intents.
///
/// The reducer is the only place state transitions happen, and it must
/// stay a pure function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
