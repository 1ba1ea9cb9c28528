use egui::Ui;

use crate::state::{register_upload, AppState};
use crate::viewport::preset_buttons;
use seisview_gui_lib::overlay::OverlayKind;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button("▶ Run Analysis")
            .on_hover_text("Run all rule modules (Enter)")
            .clicked()
        {
            state.analysis.run();
            state.status_message = Some(format!(
                "Analysis complete: {}",
                state.analysis.risk_status()
            ));
        }

        if ui
            .button("📂 Upload IFC")
            .on_hover_text("Load a model file (Ctrl+O)")
            .clicked()
        {
            action_upload(state);
        }

        if ui
            .add_enabled(state.scene.model().is_some(), egui::Button::new("🗑 Clear"))
            .on_hover_text("Unload the current model (Del)")
            .clicked()
        {
            state.scene.clear_model();
            state.status_message = Some("Model cleared".to_string());
        }

        ui.separator();

        // View presets
        ui.label("View:");
        if let Some(preset) = preset_buttons(ui) {
            state.scene.apply_preset(preset);
        }

        ui.separator();

        // Overlay toggles, available once the analysis has run
        ui.label("Overlays:");
        let has_results = state.analysis.results().is_some();
        for kind in [
            OverlayKind::ShearWalls,
            OverlayKind::Foundation,
            OverlayKind::RiskZone,
        ] {
            let active = state.scene.overlay_active(kind);
            let toggle = ui
                .add_enabled(has_results, egui::SelectableLabel::new(active, kind.label()))
                .on_disabled_hover_text("Run the analysis first");
            if toggle.clicked() {
                let foundation = state.analysis.foundation_type().to_string();
                let risk = state.analysis.risk_status().to_string();
                state.scene.toggle_overlay(kind, &foundation, &risk);
            }
        }

        // Right-aligned settings + panel toggles
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⚙").on_hover_text("Settings").clicked() {
                state.show_settings_window = !state.show_settings_window;
            }
            ui.toggle_value(&mut state.panels.results, "Results");
            ui.toggle_value(&mut state.panels.inputs, "Inputs");
            ui.toggle_value(&mut state.panels.registry, "Registry");
        });
    });
}

/// Open a file dialog and register the chosen IFC file
pub fn action_upload(state: &mut AppState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("IFC model", &["ifc"])
        .pick_file()
    else {
        return;
    };

    match register_upload(&path) {
        Ok(upload) => {
            // No parser: visualize the stand-in spec for the upload
            match state.scene.load_spec(&upload.spec) {
                Ok(()) => {
                    state.status_message = Some(format!(
                        "Loaded {} ({} KiB)",
                        upload.file_name,
                        upload.size_bytes / 1024
                    ));
                    state.upload = Some(upload);
                }
                Err(e) => {
                    tracing::error!("Upload spec rejected: {e}");
                    state.status_message = Some(e.to_string());
                }
            }
        }
        Err(e) => {
            tracing::warn!("Upload rejected: {e}");
            state.status_message = Some(e.to_string());
        }
    }
}
