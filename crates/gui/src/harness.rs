//! Headless test harness: drives the dashboard exactly as the UI would,
//! without a window or GL context.

use shared::{building_by_id, BuildingSpec};

use crate::build::{InvalidSpec, PartKind};
use crate::overlay::OverlayKind;
use crate::state::{AnalysisState, SceneState};
use crate::validation::MeshValidator;
use crate::viewport::presets::ViewPreset;

/// Headless harness — owns the scene and analysis state the way the app does
#[derive(Default)]
pub struct ViewerHarness {
    pub scene: SceneState,
    pub analysis: AnalysisState,
}

impl ViewerHarness {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Model lifecycle ───────────────────────────────────────

    /// Load a registry building by id
    pub fn load_building(&mut self, id: &str) -> Result<(), String> {
        let entry =
            building_by_id(id).ok_or_else(|| format!("unknown building '{}'", id))?;
        self.scene.load_entry(&entry).map_err(|e| e.to_string())
    }

    /// Load an ad-hoc spec
    pub fn load_spec(&mut self, spec: &BuildingSpec) -> Result<(), InvalidSpec> {
        self.scene.load_spec(spec)
    }

    pub fn clear(&mut self) {
        self.scene.clear_model();
        self.analysis.clear();
    }

    // ── Analysis + overlays ───────────────────────────────────

    pub fn run_analysis(&mut self) {
        self.analysis.run();
    }

    /// Toggle an overlay using the current analysis verdicts
    pub fn toggle_overlay(&mut self, kind: OverlayKind) {
        let foundation = self.analysis.foundation_type().to_string();
        let risk = self.analysis.risk_status().to_string();
        self.scene.toggle_overlay(kind, &foundation, &risk);
    }

    pub fn apply_preset(&mut self, preset: ViewPreset) {
        self.scene.apply_preset(preset);
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn part_count(&self) -> usize {
        self.scene.model().map_or(0, |m| m.part_count())
    }

    pub fn count_kind(&self, kind: PartKind) -> usize {
        self.scene.model().map_or(0, |m| m.count_kind(kind))
    }

    /// Validate every mesh in the loaded model and all overlays; empty
    /// result means everything is well-formed
    pub fn validate_scene(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(model) = self.scene.model() {
            for part in model.parts() {
                for err in MeshValidator::new(&part.mesh).validate_all() {
                    errors.push(format!("{}: {}", part.label, err));
                }
            }
        }
        for (kind, parts) in self.scene.overlays() {
            for part in parts {
                for err in MeshValidator::new(&part.mesh).validate_all() {
                    errors.push(format!("{} {}: {}", kind.label(), part.label, err));
                }
            }
        }
        errors
    }
}
