use glam::Vec3;

use super::mesh::MeshData;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Empty box that absorbs the first point included into it
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn include_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn from_mesh(mesh: &MeshData) -> Self {
        let mut aabb = Self::empty();
        for i in 0..mesh.vertex_count() {
            let base = i * 9;
            aabb.include_point(Vec3::new(
                mesh.vertices[base],
                mesh.vertices[base + 1],
                mesh.vertices[base + 2],
            ));
        }
        aabb
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn max_dim(&self) -> f32 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::mesh::cube;

    #[test]
    fn test_from_mesh_centered_cube() {
        let aabb = Aabb::from_mesh(&cube(2.0, 4.0, 6.0, [0.5, 0.5, 0.5]));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert!((aabb.max_dim() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_union_and_translated() {
        let a = Aabb::from_mesh(&cube(1.0, 1.0, 1.0, [0.5; 3]));
        let b = Aabb::from_mesh(
            &cube(1.0, 1.0, 1.0, [0.5; 3]).translated(Vec3::new(0.0, 10.0, 0.0)),
        );
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::new(-0.5, -0.5, -0.5));
        assert_eq!(u.max, Vec3::new(0.5, 10.5, 0.5));
    }

    #[test]
    fn test_empty_absorbs_first_point() {
        let mut aabb = Aabb::empty();
        assert!(aabb.is_empty());
        aabb.include_point(Vec3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, aabb.max);
    }
}
