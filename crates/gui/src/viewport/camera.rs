use glam::{Mat4, Vec3, Vec4};

use super::bounds::Aabb;

/// Radians of rotation per pixel of mouse drag
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Polar angle stays off the poles to keep the up vector stable
pub const POLAR_MIN: f32 = 0.1;
pub const POLAR_MAX: f32 = std::f32::consts::PI - 0.1;
/// World units of dolly per scroll unit
pub const ZOOM_STEP: f32 = 0.1;
pub const DISTANCE_MIN: f32 = 20.0;
pub const DISTANCE_MAX: f32 = 200.0;

/// Orbit camera for the 3D viewport.
///
/// Spherical coordinates around a target point: `azimuth` rotates in the
/// ground plane, `polar` tilts from the +Y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal rotation angle (radians)
    pub azimuth: f32,
    /// Angle from the +Y axis (radians), clamped to (0, pi)
    pub polar: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: std::f32::consts::FRAC_PI_4,
            polar: std::f32::consts::FRAC_PI_6,
            distance: 80.0,
            target: Vec3::new(0.0, 15.0, 0.0),
            fov: 60.0_f32.to_radians(),
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a camera looking from `eye` toward `target`
    pub fn from_eye_target(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let len = offset.length();
        let distance = len.clamp(DISTANCE_MIN, DISTANCE_MAX);
        // Coincident eye and target carry no direction; default to horizontal
        let polar = if len > 0.0 {
            (offset.y / len).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };
        Self {
            azimuth: offset.z.atan2(offset.x),
            polar: polar.clamp(POLAR_MIN, POLAR_MAX),
            distance,
            target,
            ..Self::default()
        }
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * DRAG_SENSITIVITY;
        self.polar = (self.polar + dy * DRAG_SENSITIVITY).clamp(POLAR_MIN, POLAR_MAX);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta * ZOOM_STEP).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let right = self.right_vector();
        let up = self.up_vector();
        self.target += right * dx + up * dy;
    }

    /// Re-aim at a freshly loaded model: target mid-height, pulled back far
    /// enough that the whole building fits
    pub fn frame_model(&mut self, bounds: &Aabb) {
        let center = bounds.center();
        let height = bounds.size().y;
        self.target = Vec3::new(center.x, height * 0.5, center.z);
        self.distance = (height * 1.5).clamp(50.0, DISTANCE_MAX);
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let sp = self.polar.sin();
        self.target
            + Vec3::new(
                self.distance * sp * self.azimuth.cos(),
                self.distance * self.polar.cos(),
                self.distance * sp * self.azimuth.sin(),
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 1000.0)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Y).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a 3D point to 2D screen coords (for HUD labels)
    pub fn project(&self, point: Vec3, width: f32, height: f32) -> Option<(f32, f32)> {
        let vp = self.view_projection(width / height);
        let p = vp * Vec4::new(point.x, point.y, point.z, 1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        Some((
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}
