//! Model-View-Intent primitives shared by the form, row selection and alert.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are the only place a piece of UI state changes. Side effects
//! (store writes, timers) stay in [`App`](crate::ui::app::App).

/// Marker for UI state objects. Owned, comparable, with a sensible default.
pub trait UiState: Clone + PartialEq + Default {}

/// Marker for intents (key presses, timer expiry, app commands).
pub trait Intent {}

/// Pure transition `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
