//! Analysis input form: the six parameters consumed by the rule engine.

use egui::Ui;

use crate::state::AppState;
use shared::{Groundwater, SeismicZone, SoilProfile, StructuralSystem};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis Inputs");
    ui.add_space(4.0);

    let input = &mut state.analysis.input;

    egui::Grid::new("analysis_inputs")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Seismic zone");
            egui::ComboBox::from_id_salt("zone")
                .selected_text(input.zone.label())
                .show_ui(ui, |ui| {
                    for z in SeismicZone::all() {
                        ui.selectable_value(&mut input.zone, *z, z.label());
                    }
                });
            ui.end_row();

            ui.label("Soil profile");
            egui::ComboBox::from_id_salt("soil")
                .selected_text(input.soil.label())
                .show_ui(ui, |ui| {
                    for s in SoilProfile::all() {
                        ui.selectable_value(&mut input.soil, *s, s.label());
                    }
                });
            ui.end_row();

            ui.label("Storeys");
            ui.add(
                egui::DragValue::new(&mut input.storeys)
                    .range(1..=200)
                    .speed(1),
            );
            ui.end_row();

            ui.label("Structural system");
            egui::ComboBox::from_id_salt("system")
                .selected_text(input.structural_system.label())
                .show_ui(ui, |ui| {
                    for s in StructuralSystem::all() {
                        ui.selectable_value(&mut input.structural_system, *s, s.label());
                    }
                });
            ui.end_row();

            ui.label("Groundwater");
            egui::ComboBox::from_id_salt("groundwater")
                .selected_text(input.groundwater.label())
                .show_ui(ui, |ui| {
                    for g in Groundwater::all() {
                        ui.selectable_value(&mut input.groundwater, *g, g.label());
                    }
                });
            ui.end_row();

            ui.label("Plan regularity");
            ui.checkbox(&mut input.regularity, "Regular layout");
            ui.end_row();
        });

    ui.add_space(6.0);

    if ui
        .add_sized(
            [ui.available_width(), 26.0],
            egui::Button::new("▶ Run Analysis"),
        )
        .clicked()
    {
        state.analysis.run();
        state.status_message = Some(format!(
            "Analysis complete: {}",
            state.analysis.risk_status()
        ));
    }
}
