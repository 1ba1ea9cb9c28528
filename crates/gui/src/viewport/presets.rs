use glam::Vec3;

use super::bounds::Aabb;
use super::camera::OrbitCamera;

/// Canned camera placements reachable from the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPreset {
    Top,
    Front,
    Side,
    Reset,
}

impl ViewPreset {
    pub fn label(&self) -> &'static str {
        match self {
            ViewPreset::Top => "Top",
            ViewPreset::Front => "Front",
            ViewPreset::Side => "Side",
            ViewPreset::Reset => "Reset",
        }
    }

    pub fn all() -> [ViewPreset; 4] {
        [
            ViewPreset::Top,
            ViewPreset::Front,
            ViewPreset::Side,
            ViewPreset::Reset,
        ]
    }
}

/// Camera state for a preset, scaled to the model bounds when present.
///
/// With a model loaded, eyes sit at twice the largest dimension from the
/// center (1.5x diagonal offset for Reset). Without one, fixed placements
/// frame the empty ground grid.
pub fn camera_for(preset: ViewPreset, bounds: Option<&Aabb>) -> OrbitCamera {
    match bounds {
        Some(aabb) => {
            let c = aabb.center();
            let m = aabb.max_dim();
            let eye = match preset {
                ViewPreset::Top => Vec3::new(c.x, c.y + 2.0 * m, c.z),
                ViewPreset::Front => Vec3::new(c.x, c.y, c.z + 2.0 * m),
                ViewPreset::Side => Vec3::new(c.x + 2.0 * m, c.y, c.z),
                ViewPreset::Reset => Vec3::new(c.x + 1.5 * m, c.y + m, c.z + 1.5 * m),
            };
            OrbitCamera::from_eye_target(eye, c)
        }
        None => {
            let (eye, target) = match preset {
                ViewPreset::Top => (Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO),
                ViewPreset::Front => (Vec3::new(0.0, 10.0, 40.0), Vec3::new(0.0, 5.0, 0.0)),
                ViewPreset::Side => (Vec3::new(40.0, 10.0, 0.0), Vec3::new(0.0, 5.0, 0.0)),
                ViewPreset::Reset => (Vec3::new(30.0, 20.0, 30.0), Vec3::new(0.0, 5.0, 0.0)),
            };
            OrbitCamera::from_eye_target(eye, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Aabb {
        Aabb::new(Vec3::new(-10.0, 0.0, -8.0), Vec3::new(10.0, 28.0, 8.0))
    }

    #[test]
    fn test_top_preset_looks_down() {
        let b = bounds();
        let cam = camera_for(ViewPreset::Top, Some(&b));
        assert!(cam.eye_position().y > b.center().y);
        assert_eq!(cam.target, b.center());
    }

    #[test]
    fn test_front_preset_along_z() {
        let b = bounds();
        let cam = camera_for(ViewPreset::Front, Some(&b));
        let eye = cam.eye_position();
        // max_dim = 28, so the eye sits 56 out along +Z
        assert!((eye.z - (b.center().z + 56.0)).abs() < 1e-3);
        assert!((eye.x - b.center().x).abs() < 1e-3);
    }

    #[test]
    fn test_side_preset_along_x() {
        let b = bounds();
        let cam = camera_for(ViewPreset::Side, Some(&b));
        let eye = cam.eye_position();
        assert!((eye.x - (b.center().x + 56.0)).abs() < 1e-3);
        assert!((eye.z - b.center().z).abs() < 1e-3);
    }

    #[test]
    fn test_presets_without_model() {
        let cam = camera_for(ViewPreset::Reset, None);
        let eye = cam.eye_position();
        assert!((eye - Vec3::new(30.0, 20.0, 30.0)).length() < 1e-3);
        assert_eq!(cam.target, Vec3::new(0.0, 5.0, 0.0));

        let top = camera_for(ViewPreset::Top, None);
        assert!(top.eye_position().y > 0.0);
        assert_eq!(top.target, Vec3::ZERO);
    }
}
