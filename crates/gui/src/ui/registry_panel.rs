//! Building registry panel: filterable list of the demo buildings.

use egui::{RichText, Ui};

use crate::state::AppState;
use seisview_gui_lib::build::palette::rgb_str;
use shared::{buildings_by_type, BuildingType};

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Buildings");
    ui.add_space(4.0);

    // Type filter stored in egui memory, not app state: it is pure view state
    let filter_id = ui.id().with("type_filter");
    let mut filter: Option<BuildingType> = ui
        .ctx()
        .data_mut(|d| d.get_temp(filter_id))
        .unwrap_or(None);

    ui.horizontal_wrapped(|ui| {
        if ui.selectable_label(filter.is_none(), "All").clicked() {
            filter = None;
        }
        for t in BuildingType::all() {
            if ui.selectable_label(filter == Some(*t), t.label()).clicked() {
                filter = Some(*t);
            }
        }
    });
    ui.ctx().data_mut(|d| d.insert_temp(filter_id, filter));

    ui.add_space(4.0);
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("registry_scroll")
        .show(ui, |ui| {
            for entry in buildings_by_type(filter) {
                let loaded = state.scene.loaded_id() == Some(entry.id.as_str());

                let response = ui
                    .push_id(&entry.id, |ui| {
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(6))
                            .fill(if loaded {
                                ui.visuals().selection.bg_fill.gamma_multiply(0.3)
                            } else {
                                ui.visuals().faint_bg_color
                            })
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&entry.thumbnail).size(22.0));
                                    ui.vertical(|ui| {
                                        let [r, g, b] = rgb_str(&entry.color);
                                        let accent = egui::Color32::from_rgb(
                                            (r * 255.0) as u8,
                                            (g * 255.0) as u8,
                                            (b * 255.0) as u8,
                                        );
                                        ui.label(RichText::new(&entry.name).strong().color(accent));
                                        ui.label(
                                            RichText::new(format!(
                                                "Zone {} · {} storeys",
                                                entry.seismic_zone.numeral(),
                                                entry.storeys
                                            ))
                                            .small()
                                            .weak(),
                                        );
                                    });
                                });
                            })
                            .response
                    })
                    .inner
                    .interact(egui::Sense::click())
                    .on_hover_text(&entry.description);

                if response.clicked() && !loaded {
                    match state.scene.load_entry(&entry) {
                        Ok(()) => {
                            // Seed the analysis form from the selected building
                            state.analysis.input.zone = entry.seismic_zone;
                            state.analysis.input.storeys = entry.storeys;
                            state.status_message = Some(format!("Loaded {}", entry.name));
                        }
                        Err(e) => {
                            tracing::error!(id = %entry.id, "registry entry rejected: {e}");
                            state.status_message = Some(e.to_string());
                        }
                    }
                }

                ui.add_space(4.0);
            }
        });
}
