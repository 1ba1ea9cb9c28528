//! Bottom status bar

use egui::{RichText, Ui};

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        match state.scene.loaded_id() {
            Some(id) => {
                ui.label(RichText::new(id).monospace());
                ui.separator();
                ui.label(format!("{} parts", state.scene.live_parts()));
            }
            None if state.scene.model().is_some() => {
                ui.label(RichText::new("uploaded model").monospace());
                ui.separator();
                ui.label(format!("{} parts", state.scene.live_parts()));
            }
            None => {
                ui.label(RichText::new("no model").weak());
            }
        }

        if state.analysis.results().is_some() {
            ui.separator();
            ui.label(state.analysis.risk_status());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).italics());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(concat!("SeisView v", env!("CARGO_PKG_VERSION"))).weak());
        });
    });
}
