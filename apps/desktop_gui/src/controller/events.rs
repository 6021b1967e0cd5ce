//! UI events delivered from the backend worker to the presentation layer.

use client_core::AppState;

pub enum UiEvent {
    /// The request lifecycle moved to a new state.
    StateChanged(AppState),
    /// Informational status line text.
    Info(String),
    /// The backend worker could not start; the widget stays open but no
    /// request will ever complete.
    BackendFailed(String),
}
