use std::sync::Arc;

use shared::domain::RequestVariant;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::service::TitleService;
use crate::state::{AppState, TitleStore};

/// Drives the request lifecycle: every trigger moves the store to `Loading`
/// and then to `Loaded` or `Errored` on completion, never skipping
/// `Loading`.
///
/// Overlapping triggers are not serialized. Both requests run to completion
/// and whichever resolves last overwrites the store (last-write-wins); there
/// is no cancellation and no retry.
pub struct TitleDispatcher {
    service: Arc<dyn TitleService>,
    store: TitleStore,
}

impl TitleDispatcher {
    pub fn new(service: Arc<dyn TitleService>) -> Self {
        Self {
            service,
            store: TitleStore::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.store.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    /// Issues one title request for the chosen variant.
    ///
    /// The `Loading` transition happens before the first await point, so a
    /// caller that observes this future as started has already had the store
    /// move to `Loading`.
    pub async fn trigger(&self, variant: RequestVariant) {
        self.store.set_loading();
        info!(variant = variant.label(), "title request started");

        let result = self.service.fetch_title(variant).await;
        match &result {
            Ok(title) => info!(?title, "title request completed"),
            Err(err) => warn!(%err, "title request failed"),
        }
        self.store.resolve(result);
    }
}
