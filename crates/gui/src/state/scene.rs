//! Scene state: the loaded building model, active overlays, and the camera.
//!
//! Part lifetimes are tracked explicitly: every part entering the scene bumps
//! the allocation counter, every part leaving bumps the disposal counter.
//! `allocated - disposed` always equals the number of live parts, so leaks
//! from model swaps show up in tests immediately.

use shared::{BuildingEntry, BuildingSpec};

use crate::build::{build_building, BuildingModel, InvalidSpec, Part};
use crate::overlay::{overlay_parts, OverlayKind};
use crate::viewport::bounds::Aabb;
use crate::viewport::camera::OrbitCamera;
use crate::viewport::presets::{camera_for, ViewPreset};

pub struct SceneState {
    model: Option<BuildingModel>,
    /// Registry id of the loaded model, if it came from the registry
    loaded_id: Option<String>,
    overlays: Vec<(OverlayKind, Vec<Part>)>,
    pub camera: OrbitCamera,
    /// Monotonically increasing version counter for GPU cache invalidation
    version: u64,
    parts_allocated: u64,
    parts_disposed: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            model: None,
            loaded_id: None,
            overlays: Vec::new(),
            camera: OrbitCamera::default(),
            version: 0,
            parts_allocated: 0,
            parts_disposed: 0,
        }
    }
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn model(&self) -> Option<&BuildingModel> {
        self.model.as_ref()
    }

    pub fn loaded_id(&self) -> Option<&str> {
        self.loaded_id.as_deref()
    }

    pub fn model_bounds(&self) -> Option<Aabb> {
        self.model.as_ref().map(|m| m.bounds)
    }

    pub fn overlays(&self) -> &[(OverlayKind, Vec<Part>)] {
        &self.overlays
    }

    pub fn overlay_active(&self, kind: OverlayKind) -> bool {
        self.overlays.iter().any(|(k, _)| *k == kind)
    }

    pub fn parts_allocated(&self) -> u64 {
        self.parts_allocated
    }

    pub fn parts_disposed(&self) -> u64 {
        self.parts_disposed
    }

    /// Parts currently in the scene (model plus overlays)
    pub fn live_parts(&self) -> u64 {
        let model = self.model.as_ref().map_or(0, |m| m.part_count() as u64);
        let overlays: usize = self.overlays.iter().map(|(_, p)| p.len()).sum();
        model + overlays as u64
    }

    fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Build and load a model from a spec, replacing whatever was loaded.
    ///
    /// On a bad spec the previous scene survives untouched.
    pub fn load_spec(&mut self, spec: &BuildingSpec) -> Result<(), InvalidSpec> {
        let model = build_building(spec)?;
        self.replace_model(model, None);
        Ok(())
    }

    /// Load one of the registry demo buildings
    pub fn load_entry(&mut self, entry: &BuildingEntry) -> Result<(), InvalidSpec> {
        let spec = BuildingSpec::from_entry(entry);
        let model = build_building(&spec)?;
        self.replace_model(model, Some(entry.id.clone()));
        Ok(())
    }

    fn replace_model(&mut self, model: BuildingModel, loaded_id: Option<String>) {
        self.dispose_model();
        self.dispose_overlays();

        self.parts_allocated += model.part_count() as u64;
        let bounds = model.bounds;
        self.model = Some(model);
        self.loaded_id = loaded_id;
        self.camera.frame_model(&bounds);
        self.notify_mutated();

        tracing::info!(
            id = self.loaded_id.as_deref().unwrap_or("<spec>"),
            live = self.live_parts(),
            "model loaded"
        );
    }

    /// Drop the current model and all overlays
    pub fn clear_model(&mut self) {
        if self.model.is_none() && self.overlays.is_empty() {
            return;
        }
        self.dispose_model();
        self.dispose_overlays();
        self.loaded_id = None;
        self.notify_mutated();
    }

    fn dispose_model(&mut self) {
        if let Some(old) = self.model.take() {
            self.parts_disposed += old.part_count() as u64;
        }
    }

    fn dispose_overlays(&mut self) {
        for (_, parts) in self.overlays.drain(..) {
            self.parts_disposed += parts.len() as u64;
        }
    }

    /// Toggle an overlay on or off. Generation needs the current analysis
    /// verdicts, passed in as the raw result strings.
    pub fn toggle_overlay(&mut self, kind: OverlayKind, foundation_type: &str, risk_status: &str) {
        if let Some(pos) = self.overlays.iter().position(|(k, _)| *k == kind) {
            let (_, parts) = self.overlays.remove(pos);
            self.parts_disposed += parts.len() as u64;
        } else {
            let parts = overlay_parts(kind, foundation_type, risk_status);
            self.parts_allocated += parts.len() as u64;
            self.overlays.push((kind, parts));
        }
        self.notify_mutated();
    }

    /// Jump the camera to a preset, scaled to the loaded model if any
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        self.camera = camera_for(preset, self.model_bounds().as_ref());
        self.notify_mutated();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::building_by_id;

    #[test]
    fn test_load_entry_frames_camera() {
        let mut scene = SceneState::default();
        let entry = building_by_id("residential-tower").unwrap();
        scene.load_entry(&entry).unwrap();

        assert_eq!(scene.loaded_id(), Some("residential-tower"));
        assert!(scene.model().is_some());
        // 15 storeys x 3.5 m: distance clamps to 1.5x height
        assert!((scene.camera.distance - 78.75).abs() < 1e-3);
    }

    #[test]
    fn test_version_bumps_on_mutation() {
        let mut scene = SceneState::default();
        let v0 = scene.version();
        scene
            .load_entry(&building_by_id("demo-building").unwrap())
            .unwrap();
        assert!(scene.version() > v0);

        let v1 = scene.version();
        scene.apply_preset(ViewPreset::Top);
        assert!(scene.version() > v1);
    }

    #[test]
    fn test_disposal_counter_balances() {
        let mut scene = SceneState::default();
        scene
            .load_entry(&building_by_id("demo-building").unwrap())
            .unwrap();
        scene.toggle_overlay(OverlayKind::ShearWalls, "Isolated/Raft", "Low Risk");
        scene
            .load_entry(&building_by_id("hospital-building").unwrap())
            .unwrap();
        scene.toggle_overlay(OverlayKind::RiskZone, "Piled Raft", "High Risk");
        scene.clear_model();

        assert_eq!(scene.live_parts(), 0);
        assert_eq!(scene.parts_allocated(), scene.parts_disposed());
    }

    #[test]
    fn test_live_parts_matches_counters() {
        let mut scene = SceneState::default();
        scene
            .load_entry(&building_by_id("commercial-complex").unwrap())
            .unwrap();
        scene.toggle_overlay(OverlayKind::Foundation, "Piled Raft", "Low Risk");

        assert_eq!(
            scene.live_parts(),
            scene.parts_allocated() - scene.parts_disposed()
        );
    }

    #[test]
    fn test_failed_load_keeps_scene() {
        let mut scene = SceneState::default();
        scene
            .load_entry(&building_by_id("demo-building").unwrap())
            .unwrap();
        let live = scene.live_parts();

        let bad = BuildingSpec {
            storeys: 0,
            ..BuildingSpec::default()
        };
        assert!(scene.load_spec(&bad).is_err());
        assert_eq!(scene.live_parts(), live);
        assert_eq!(scene.loaded_id(), Some("demo-building"));
    }

    #[test]
    fn test_toggle_overlay_roundtrip() {
        let mut scene = SceneState::default();
        scene.toggle_overlay(OverlayKind::ShearWalls, "", "Low Risk");
        assert!(scene.overlay_active(OverlayKind::ShearWalls));
        scene.toggle_overlay(OverlayKind::ShearWalls, "", "Low Risk");
        assert!(!scene.overlay_active(OverlayKind::ShearWalls));
        assert_eq!(scene.live_parts(), 0);
    }
}
