//! Integration tests for the viewer workflow: load, analyze, overlay,
//! navigate. Runs through the headless harness the way the UI would.

use seisview_gui_lib::harness::ViewerHarness;
use seisview_gui_lib::overlay::OverlayKind;
use seisview_gui_lib::viewport::camera::{DISTANCE_MAX, DISTANCE_MIN, POLAR_MAX, POLAR_MIN};
use seisview_gui_lib::viewport::presets::ViewPreset;

#[test]
fn test_full_session_lifecycle() {
    let mut h = ViewerHarness::new();

    h.load_building("residential-tower").unwrap();
    assert!(h.part_count() > 0);

    h.run_analysis();
    h.toggle_overlay(OverlayKind::ShearWalls);
    h.toggle_overlay(OverlayKind::Foundation);
    h.toggle_overlay(OverlayKind::RiskZone);

    let errors = h.validate_scene();
    assert!(errors.is_empty(), "mesh errors: {:?}", errors);

    h.clear();
    assert_eq!(h.scene.live_parts(), 0);
    assert_eq!(h.scene.parts_allocated(), h.scene.parts_disposed());
}

#[test]
fn test_camera_angles_stay_clamped() {
    let mut h = ViewerHarness::new();
    h.load_building("demo-building").unwrap();

    // A long vertical drag must never flip over the poles
    for _ in 0..500 {
        h.scene.camera.rotate(3.0, 40.0);
    }
    assert!(h.scene.camera.polar <= POLAR_MAX);

    for _ in 0..500 {
        h.scene.camera.rotate(-3.0, -40.0);
    }
    assert!(h.scene.camera.polar >= POLAR_MIN);
}

#[test]
fn test_camera_distance_stays_clamped() {
    let mut h = ViewerHarness::new();
    h.scene.camera.zoom(1.0e6);
    assert!((h.scene.camera.distance - DISTANCE_MAX).abs() < 1e-6);
    h.scene.camera.zoom(-1.0e6);
    assert!((h.scene.camera.distance - DISTANCE_MIN).abs() < 1e-6);
}

#[test]
fn test_top_preset_looks_down() {
    let mut h = ViewerHarness::new();
    h.load_building("commercial-complex").unwrap();
    h.apply_preset(ViewPreset::Top);

    let eye = h.scene.camera.eye_position();
    let center = h.scene.model().unwrap().bounds.center();
    assert!(eye.y > center.y, "top preset eye below model center");
}

#[test]
fn test_presets_frame_the_model() {
    let mut h = ViewerHarness::new();
    h.load_building("hospital-building").unwrap();
    let bounds = h.scene.model().unwrap().bounds;

    for preset in ViewPreset::all() {
        h.apply_preset(preset);
        let cam = &h.scene.camera;
        assert!((cam.target - bounds.center()).length() < 1e-3);
        assert!(cam.distance >= DISTANCE_MIN && cam.distance <= DISTANCE_MAX);
    }
}

#[test]
fn test_model_swaps_never_leak_parts() {
    let mut h = ViewerHarness::new();
    let ids = [
        "residential-tower",
        "industrial-warehouse",
        "hospital-building",
        "school-building",
        "demo-building",
        "commercial-complex",
    ];

    h.run_analysis();
    for id in ids {
        h.load_building(id).unwrap();
        h.toggle_overlay(OverlayKind::Foundation);
        assert_eq!(
            h.scene.live_parts(),
            h.scene.parts_allocated() - h.scene.parts_disposed()
        );
    }

    h.clear();
    assert_eq!(h.scene.parts_allocated(), h.scene.parts_disposed());
}

#[test]
fn test_overlay_toggle_is_involutive() {
    let mut h = ViewerHarness::new();
    h.load_building("demo-building").unwrap();
    h.run_analysis();

    let base = h.scene.live_parts();
    h.toggle_overlay(OverlayKind::RiskZone);
    assert!(h.scene.live_parts() > base);
    h.toggle_overlay(OverlayKind::RiskZone);
    assert_eq!(h.scene.live_parts(), base);
}

#[test]
fn test_overlays_reflect_analysis_verdicts() {
    let mut h = ViewerHarness::new();
    h.load_building("residential-tower").unwrap();

    // Zone V, soft soil, 25 storeys: piled raft foundation, high risk
    h.analysis.input.zone = shared::SeismicZone::V;
    h.analysis.input.soil = shared::SoilProfile::Soft;
    h.analysis.input.storeys = 25;
    h.run_analysis();
    assert_eq!(h.analysis.foundation_type(), "Piled Raft");
    assert_eq!(h.analysis.risk_status(), "High Risk");

    h.toggle_overlay(OverlayKind::Foundation);
    let (_, parts) = &h.scene.overlays()[0];
    // Piled scheme: pile cap plus a 3x3 pile grid
    assert_eq!(parts.len(), 10);
}

#[test]
fn test_version_advances_for_gpu_sync() {
    let mut h = ViewerHarness::new();
    let v0 = h.scene.version();

    h.load_building("school-building").unwrap();
    let v1 = h.scene.version();
    assert!(v1 > v0);

    h.run_analysis();
    h.toggle_overlay(OverlayKind::ShearWalls);
    let v2 = h.scene.version();
    assert!(v2 > v1);

    h.apply_preset(ViewPreset::Side);
    assert!(h.scene.version() > v2);
}
