use shared::domain::TitleRecord;
use tokio::sync::watch;

use crate::error::FetchError;

/// Request-lifecycle state. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    /// No request made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Loaded { title: TitleRecord },
    /// The last request failed.
    Errored { message: String },
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Holds the single current [`AppState`] behind a watch channel.
///
/// Readers subscribe for change notification or take point-in-time
/// snapshots. The mutators are crate-private so the dispatcher stays the
/// only writer.
#[derive(Debug)]
pub struct TitleStore {
    tx: watch::Sender<AppState>,
}

impl TitleStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(AppState::Idle);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.tx.borrow().clone()
    }

    pub(crate) fn set_loading(&self) {
        self.tx.send_replace(AppState::Loading);
    }

    pub(crate) fn resolve(&self, result: Result<TitleRecord, FetchError>) {
        let next = match result {
            Ok(title) => AppState::Loaded { title },
            Err(err) => AppState::Errored {
                message: err.to_string(),
            },
        };
        self.tx.send_replace(next);
    }
}

impl Default for TitleStore {
    fn default() -> Self {
        Self::new()
    }
}
