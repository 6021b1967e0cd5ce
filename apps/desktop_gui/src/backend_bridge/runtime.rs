//! Runtime bridge between the UI command queue and the title dispatcher.
//!
//! A dedicated worker thread owns a tokio runtime, the dispatcher, and the
//! HTTP service. Store changes flow back to the UI as [`UiEvent`]s over a
//! bounded channel; the GUI never blocks on the backend.

use std::{sync::Arc, thread};

use client_core::{HttpTitleService, TitleDispatcher};
use crossbeam_channel::{Receiver, Sender};
use tracing::error;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let service = Arc::new(HttpTitleService::new(settings.server_url.clone()));
            let dispatcher = Arc::new(TitleDispatcher::new(service));
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Ready - title service at {}",
                settings.server_url
            )));

            let mut states = dispatcher.subscribe();
            let state_tx = ui_tx.clone();
            tokio::spawn(async move {
                while states.changed().await.is_ok() {
                    let state = states.borrow_and_update().clone();
                    let _ = state_tx.try_send(UiEvent::StateChanged(state));
                }
            });

            // Commands are dispatched as independent tasks so overlapping
            // triggers can race; the store records the last completion.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::GenerateTitle { variant } => {
                        let dispatcher = Arc::clone(&dispatcher);
                        tokio::spawn(async move {
                            dispatcher.trigger(variant).await;
                        });
                    }
                }
            }
        });
    });
}
