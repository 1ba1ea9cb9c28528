// Library crate: exposes headless-testable modules for integration tests.
// GUI-specific modules (app, ui, GL rendering) remain in the binary crate.

pub mod build;
pub mod fixtures;
pub mod harness;
pub mod overlay;
pub mod state;
pub mod validation;

/// Subset of viewport types usable headlessly (mesh data, bounds, camera,
/// presets). The GL renderer and the egui widget stay in the binary crate.
pub mod viewport {
    pub mod bounds;
    pub mod camera;
    pub mod mesh;
    pub mod presets;
}
