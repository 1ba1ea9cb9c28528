//! Procedural building geometry.
//!
//! Deterministic construction of a BIM-style building mesh tree from a
//! [`BuildingSpec`]: structural frame, curtain wall facade, roof structure
//! and type-specific decoration. Same spec, same part tree.

pub mod facade;
pub mod frame;
pub mod palette;
pub mod roof;

use shared::{BuildingSpec, BuildingType};

use crate::viewport::bounds::Aabb;
use crate::viewport::mesh::MeshData;
use palette::TypeStyle;

/// Result of validating a spec before geometry generation
pub type BuildResult = Result<BuildingModel, InvalidSpec>;

/// Spec rejected before any geometry was generated
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidSpec {
    /// Storey count outside [1, max]
    StoreyCount(u32),
    /// A plan or height dimension was zero or negative
    Dimension(&'static str, f32),
}

impl std::fmt::Display for InvalidSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSpec::StoreyCount(n) => {
                write!(f, "Storey count {} outside 1..={}", n, MAX_STOREYS)
            }
            InvalidSpec::Dimension(name, v) => {
                write!(f, "Dimension '{}' must be positive, got {}", name, v)
            }
        }
    }
}

impl std::error::Error for InvalidSpec {}

/// Upper bound on storeys so a bad upload cannot allocate unbounded geometry
pub const MAX_STOREYS: u32 = 200;

/// Structural role of one part; drives overlays, stats and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Column,
    FloorSlab,
    EdgeBeam,
    CurtainWall,
    Mullion,
    Roof,
    Truss,
    Parapet,
    Foundation,
    Helipad,
    Dock,
    Overlay,
}

/// One solid in the building: a baked mesh plus render metadata
pub struct Part {
    pub label: String,
    pub kind: PartKind,
    pub mesh: MeshData,
    /// 1.0 renders in the opaque pass, anything lower in the blended pass
    pub opacity: f32,
}

impl Part {
    pub fn opaque(label: impl Into<String>, kind: PartKind, mesh: MeshData) -> Self {
        Self {
            label: label.into(),
            kind,
            mesh,
            opacity: 1.0,
        }
    }

    pub fn translucent(
        label: impl Into<String>,
        kind: PartKind,
        mesh: MeshData,
        opacity: f32,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            mesh,
            opacity,
        }
    }
}

/// Named collection of parts (one construction stage of the building)
pub struct MeshGroup {
    pub name: &'static str,
    pub parts: Vec<Part>,
}

/// Full generated building: grouped parts plus the combined bounds
pub struct BuildingModel {
    pub building_type: BuildingType,
    pub groups: Vec<MeshGroup>,
    pub bounds: Aabb,
}

impl BuildingModel {
    pub fn part_count(&self) -> usize {
        self.groups.iter().map(|g| g.parts.len()).sum()
    }

    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.groups.iter().flat_map(|g| g.parts.iter())
    }

    pub fn count_kind(&self, kind: PartKind) -> usize {
        self.parts().filter(|p| p.kind == kind).count()
    }
}

fn validate(spec: &BuildingSpec) -> Result<(), InvalidSpec> {
    if spec.storeys == 0 || spec.storeys > MAX_STOREYS {
        return Err(InvalidSpec::StoreyCount(spec.storeys));
    }
    for (name, v) in [
        ("width", spec.width),
        ("depth", spec.depth),
        ("floor_height", spec.floor_height),
    ] {
        if !v.is_finite() || v <= 0.0 {
            return Err(InvalidSpec::Dimension(name, v));
        }
    }
    Ok(())
}

/// Build the complete mesh tree for one spec.
///
/// Construction order is fixed: frame (columns, slabs, beams, foundation),
/// facade (curtain walls, mullions), roof structure, decoration. The part
/// tree is fully determined by the spec.
pub fn build_building(spec: &BuildingSpec) -> BuildResult {
    validate(spec)?;

    let style = TypeStyle::for_type(spec.building_type);

    let mut groups = vec![
        frame::build_frame(spec, &style),
        facade::build_facade(spec, &style),
        roof::build_roof(spec, &style),
    ];
    if let Some(decoration) = roof::build_decoration(spec, &style) {
        groups.push(decoration);
    }

    let mut bounds = Aabb::empty();
    for group in &groups {
        for part in &group.parts {
            bounds = bounds.union(&Aabb::from_mesh(&part.mesh));
        }
    }

    tracing::debug!(
        building_type = ?spec.building_type,
        storeys = spec.storeys,
        parts = groups.iter().map(|g| g.parts.len()).sum::<usize>(),
        "built building model"
    );

    Ok(BuildingModel {
        building_type: spec.building_type,
        groups,
        bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(storeys: u32, building_type: BuildingType) -> BuildingSpec {
        BuildingSpec {
            storeys,
            width: 25.0,
            depth: 20.0,
            floor_height: BuildingSpec::DEFAULT_FLOOR_HEIGHT,
            building_type,
        }
    }

    #[test]
    fn test_rejects_zero_storeys() {
        let bad = spec(0, BuildingType::Residential);
        assert!(matches!(
            build_building(&bad),
            Err(InvalidSpec::StoreyCount(0))
        ));
    }

    #[test]
    fn test_rejects_nonpositive_dimension() {
        let mut bad = spec(5, BuildingType::Residential);
        bad.depth = 0.0;
        assert!(matches!(
            build_building(&bad),
            Err(InvalidSpec::Dimension("depth", _))
        ));
        bad.depth = f32::NAN;
        assert!(build_building(&bad).is_err());
    }

    #[test]
    fn test_slab_count_is_storeys_plus_one() {
        for storeys in [1, 5, 15] {
            let model = build_building(&spec(storeys, BuildingType::Residential)).unwrap();
            assert_eq!(
                model.count_kind(PartKind::FloorSlab),
                storeys as usize + 1
            );
        }
    }

    #[test]
    fn test_column_count_matches_grid() {
        // Residential grid is 4x4, institutional 5x5
        let res = build_building(&spec(8, BuildingType::Residential)).unwrap();
        assert_eq!(res.count_kind(PartKind::Column), 16);

        let inst = build_building(&spec(6, BuildingType::Institutional)).unwrap();
        assert_eq!(inst.count_kind(PartKind::Column), 25);
    }

    #[test]
    fn test_bounds_match_height() {
        let model = build_building(&spec(8, BuildingType::Residential)).unwrap();
        let total_height = 8.0 * BuildingSpec::DEFAULT_FLOOR_HEIGHT;
        // Roof slab tops out above the last floor; foundation reaches below grade
        assert!(model.bounds.max.y > total_height);
        assert!(model.bounds.min.y < 0.0);
    }

    #[test]
    fn test_part_count_deterministic() {
        let a = build_building(&spec(8, BuildingType::Residential)).unwrap();
        let b = build_building(&spec(8, BuildingType::Residential)).unwrap();
        assert_eq!(a.part_count(), b.part_count());

        let labels_a: Vec<_> = a.parts().map(|p| p.label.clone()).collect();
        let labels_b: Vec<_> = b.parts().map(|p| p.label.clone()).collect();
        assert_eq!(labels_a, labels_b);
    }

    #[test]
    fn test_type_specific_decoration() {
        let inst = build_building(&spec(6, BuildingType::Institutional)).unwrap();
        // Pad plus the three H-marking bars
        assert_eq!(inst.count_kind(PartKind::Helipad), 4);
        assert_eq!(inst.count_kind(PartKind::Dock), 0);

        let ind = build_building(&spec(2, BuildingType::Industrial)).unwrap();
        assert_eq!(ind.count_kind(PartKind::Dock), 1);
        assert_eq!(ind.count_kind(PartKind::Truss), 5);
        assert_eq!(ind.count_kind(PartKind::Parapet), 0);

        let res = build_building(&spec(8, BuildingType::Residential)).unwrap();
        assert_eq!(res.count_kind(PartKind::Parapet), 4);
        assert_eq!(res.count_kind(PartKind::Truss), 0);
    }

    #[test]
    fn test_glass_walls_are_translucent() {
        let model = build_building(&spec(8, BuildingType::Commercial)).unwrap();
        let glass: Vec<_> = model
            .parts()
            .filter(|p| p.kind == PartKind::CurtainWall)
            .collect();
        assert_eq!(glass.len(), 4);
        assert!(glass.iter().all(|p| p.opacity < 1.0));
    }
}
