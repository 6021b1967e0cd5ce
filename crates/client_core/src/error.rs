use thiserror::Error;

/// Failure taxonomy for a title fetch.
///
/// Every variant is normalized into `AppState::Errored` at the dispatcher
/// boundary; nothing propagates further, and the only recovery path is a
/// fresh trigger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure, including an unreachable endpoint.
    #[error("network failure: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("server returned status {status}")]
    Protocol { status: u16 },
    /// The body was not valid JSON or is missing required fields.
    #[error("invalid title payload: {0}")]
    Decode(String),
}
