//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
pub use seisview_gui_lib::viewport::{bounds, camera, mesh, presets};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use camera::OrbitCamera;
use gl_renderer::{GlRenderer, RenderParams, SceneMesh};
use presets::ViewPreset;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self { gl_renderer: None }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            state.scene.camera.rotate(delta.x, delta.y);
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            let pan_speed = state.scene.camera.distance * 0.002;
            state
                .scene
                .camera
                .pan(-delta.x * pan_speed, delta.y * pan_speed);
        }

        // ── Scroll zoom ─────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                state.scene.camera.zoom(-scroll);
            }
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────────
        self.render_gl(ui, rect, state);

        // ── HUD overlays ─────────────────────────────────
        self.draw_hud(ui, rect, state);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // GL context unavailable: degrade to a static message
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(26, 26, 46));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "3D view unavailable (no OpenGL context)",
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgb(160, 160, 170),
            );
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = state.scene.camera.clone();
        let version = state.scene.version();

        // Snapshot part meshes for the callback; the sync below is a no-op
        // unless the version changed
        let mut parts: Vec<SceneMesh> = Vec::new();
        if let Some(model) = state.scene.model() {
            for part in model.parts() {
                parts.push(SceneMesh {
                    mesh: part.mesh.clone(),
                    opacity: part.opacity,
                });
            }
        }
        for (_, overlay_parts) in state.scene.overlays() {
            for part in overlay_parts {
                parts.push(SceneMesh {
                    mesh: part.mesh.clone(),
                    opacity: part.opacity,
                });
            }
        }

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_from_scene(gl, &parts, version);

                    let render_params = RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_hud(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        self.draw_camera_info(&painter, rect, &state.scene.camera);

        // Label floating above the loaded model
        if let Some(bounds) = state.scene.model_bounds() {
            if let Some(id) = state.scene.loaded_id() {
                let top = glam::Vec3::new(
                    bounds.center().x,
                    bounds.max.y + 3.0,
                    bounds.center().z,
                );
                if let Some((x, y)) =
                    state.scene.camera.project(top, rect.width(), rect.height())
                {
                    painter.text(
                        egui::pos2(rect.left() + x, rect.top() + y),
                        egui::Align2::CENTER_BOTTOM,
                        id,
                        egui::FontId::proportional(12.0),
                        egui::Color32::from_rgb(220, 220, 230),
                    );
                }
            }
        }

        // Navigation hint
        if state.scene.model().is_none() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                "Drag to orbit · scroll to zoom · right-drag to pan · pick a building to load",
                egui::FontId::proportional(11.0),
                egui::Color32::from_rgb(100, 100, 110),
            );
        }
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect, camera: &OrbitCamera) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nAz: {:.0}  Pol: {:.0}",
                camera.distance,
                camera.azimuth.to_degrees(),
                camera.polar.to_degrees(),
            ),
            egui::FontId::monospace(11.0),
            egui::Color32::from_rgb(200, 200, 210),
        );
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Toolbar row of view preset buttons; returns the clicked preset
pub fn preset_buttons(ui: &mut Ui) -> Option<ViewPreset> {
    let mut clicked = None;
    for preset in ViewPreset::all() {
        if ui.button(preset.label()).clicked() {
            clicked = Some(preset);
        }
    }
    clicked
}
