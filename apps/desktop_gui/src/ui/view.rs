//! Stateless rendering of the request lifecycle.
//!
//! While a request is loading the spinner replaces the title area entirely;
//! a previously loaded title is not shown underneath.

use client_core::AppState;
use eframe::egui;
use shared::display::format_title;
use shared::domain::RequestVariant;

pub fn title_heading(ui: &mut egui::Ui, state: &AppState) {
    match state {
        AppState::Idle => {
            // Non-breaking space keeps the heading height stable before the
            // first request.
            ui.heading("\u{00a0}");
        }
        AppState::Loading => {
            ui.add(egui::Spinner::new().size(28.0));
        }
        AppState::Loaded { title } => {
            ui.heading(format_title(title));
        }
        AppState::Errored { message } => {
            ui.colored_label(
                egui::Color32::from_rgb(200, 80, 80),
                format!("Error: {message}"),
            );
        }
    }
}

pub fn trigger_controls(ui: &mut egui::Ui) -> Option<RequestVariant> {
    let mut triggered = None;
    if ui.button("Generate Fake Title").clicked() {
        triggered = Some(RequestVariant::Normal);
    }
    if ui.button("Generate Fake Title Slowly").clicked() {
        triggered = Some(RequestVariant::Slow);
    }
    triggered
}
