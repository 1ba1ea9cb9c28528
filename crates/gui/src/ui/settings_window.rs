//! Settings window

use eframe::egui;

use crate::state::AppState;

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_settings_window {
        return;
    }

    let mut open = state.show_settings_window;
    let mut changed = false;

    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Grid");
            changed |= ui
                .checkbox(&mut state.settings.grid.visible, "Show grid")
                .changed();
            ui.horizontal(|ui| {
                ui.label("Cell size");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut state.settings.grid.size)
                            .range(0.5..=10.0)
                            .speed(0.1)
                            .suffix(" m"),
                    )
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Range");
                changed |= ui
                    .add(egui::DragValue::new(&mut state.settings.grid.range).range(5..=100))
                    .changed();
            });
            ui.horizontal(|ui| {
                ui.label("Opacity");
                changed |= ui
                    .add(egui::Slider::new(
                        &mut state.settings.grid.opacity,
                        0.0..=1.0,
                    ))
                    .changed();
            });

            ui.separator();
            ui.heading("Axes");
            changed |= ui
                .checkbox(&mut state.settings.axes.visible, "Show axes")
                .changed();
            ui.horizontal(|ui| {
                ui.label("Length");
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut state.settings.axes.length)
                            .range(1.0..=20.0)
                            .speed(0.1)
                            .suffix(" m"),
                    )
                    .changed();
            });

            ui.separator();
            ui.heading("Viewport");
            ui.horizontal(|ui| {
                ui.label("Background");
                let mut color = egui::Color32::from_rgb(
                    state.settings.viewport.background_color[0],
                    state.settings.viewport.background_color[1],
                    state.settings.viewport.background_color[2],
                );
                if ui.color_edit_button_srgba(&mut color).changed() {
                    state.settings.viewport.background_color = [color.r(), color.g(), color.b()];
                    changed = true;
                }
            });
            changed |= ui
                .checkbox(&mut state.settings.viewport.antialiasing, "Anti-aliasing")
                .changed();

            ui.separator();
            ui.heading("Interface");
            ui.horizontal(|ui| {
                ui.label("Font size");
                changed |= ui
                    .add(
                        egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=22.0)
                            .suffix(" pt"),
                    )
                    .changed();
            });

            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                state.settings = Default::default();
                changed = true;
            }
        });

    if changed {
        state.settings.save();
    }
    state.show_settings_window = open;
}
