//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{input_panel, registry_panel, results_panel, settings_window, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct DashboardApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_building: Option<String>) -> Self {
        let mut state = AppState::default();

        // Load initial building from CLI argument
        if let Some(id) = initial_building {
            if let Some(entry) = shared::building_by_id(&id) {
                match state.scene.load_entry(&entry) {
                    Ok(()) => tracing::info!("Loaded building '{id}' from CLI"),
                    Err(e) => tracing::error!("Cannot load building '{id}': {e}"),
                }
            }
        }

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        } else {
            tracing::warn!("No GL context; viewport rendering disabled");
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Settings window ──────────────────────────────────
        settings_window::show(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: building registry ────────────────────
        if self.state.panels.registry {
            egui::SidePanel::left("registry")
                .default_width(230.0)
                .width_range(160.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    registry_panel::show(ui, &mut self.state);
                });
        }

        // ── Right panel: inputs + results ────────────────────
        self.show_right_panel(ctx);

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}

impl DashboardApp {
    fn show_right_panel(&mut self, ctx: &egui::Context) {
        let show_right = self.state.panels.inputs || self.state.panels.results;
        if !show_right {
            return;
        }

        egui::SidePanel::right("analysis_panel")
            .default_width(320.0)
            .width_range(240.0..=520.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)))
            .show(ctx, |ui| {
                let show_inputs = self.state.panels.inputs;
                let show_results = self.state.panels.results;

                if show_inputs && show_results {
                    input_panel::show(ui, &mut self.state);

                    ui.add_space(2.0);
                    ui.separator();
                    ui.add_space(2.0);

                    egui::ScrollArea::vertical()
                        .id_salt("results_scroll")
                        .show(ui, |ui| {
                            results_panel::show(ui, &mut self.state);
                        });
                } else if show_inputs {
                    input_panel::show(ui, &mut self.state);
                } else {
                    egui::ScrollArea::vertical()
                        .id_salt("results_scroll_full")
                        .show(ui, |ui| {
                            results_panel::show(ui, &mut self.state);
                        });
                }
            });
    }
}
