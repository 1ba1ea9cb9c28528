//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::ui::toolbar;
use seisview_gui_lib::viewport::presets::ViewPreset;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // T / F / S — view presets, R — reset view
        if i.key_pressed(egui::Key::T) {
            state.scene.apply_preset(ViewPreset::Top);
        }
        if i.key_pressed(egui::Key::F) {
            state.scene.apply_preset(ViewPreset::Front);
        }
        if i.key_pressed(egui::Key::S) && !i.modifiers.command {
            state.scene.apply_preset(ViewPreset::Side);
        }
        if i.key_pressed(egui::Key::R) {
            state.scene.apply_preset(ViewPreset::Reset);
        }
        // Enter — run analysis
        if i.key_pressed(egui::Key::Enter) {
            state.analysis.run();
        }
        // Ctrl+O — upload model
        if i.modifiers.command && i.key_pressed(egui::Key::O) {
            toolbar::action_upload(state);
        }
        // Delete — clear loaded model
        if i.key_pressed(egui::Key::Delete) {
            state.scene.clear_model();
            state.status_message = Some("Model cleared".to_string());
        }
        // Escape — dismiss status message / close settings
        if i.key_pressed(egui::Key::Escape) {
            if state.status_message.is_some() {
                state.status_message = None;
            } else {
                state.show_settings_window = false;
            }
        }
    });
}
