//! Widget application shell: drains backend events each frame and queues
//! trigger commands back to the worker.

use client_core::AppState;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::view;

pub struct WidgetApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: AppState,
    status: String,
}

impl WidgetApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: AppState::Idle,
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::StateChanged(state) => {
                    self.state = state;
                }
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendFailed(message) => {
                    self.status = message;
                }
            }
        }
    }

    fn queue_command(&mut self, command: BackendCommand) {
        match self.cmd_tx.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.status = "Backend worker is busy; command dropped".to_string();
            }
            Err(TrySendError::Disconnected(_)) => {
                self.status = "Backend worker disconnected".to_string();
            }
        }
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                view::title_heading(ui, &self.state);
                ui.add_space(16.0);
                if let Some(variant) = view::trigger_controls(ui) {
                    self.queue_command(BackendCommand::GenerateTitle { variant });
                }
                ui.add_space(12.0);
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        // Poll unconditionally: backend events arrive over a plain channel
        // and do not wake the event loop on their own. Tighten the interval
        // while a request is in flight so the spinner animates.
        if self.state.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
