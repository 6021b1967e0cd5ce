//! Client-side core for the fake title widget: the request dispatcher, the
//! lifecycle state store, and the HTTP service boundary.

pub mod dispatcher;
pub mod error;
pub mod service;
pub mod state;

pub use dispatcher::TitleDispatcher;
pub use error::FetchError;
pub use service::{HttpTitleService, TitleService};
pub use state::{AppState, TitleStore};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
