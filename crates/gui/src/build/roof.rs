//! Roof structure (flat or sloped), parapet, and type-specific decoration.

use glam::Vec3;
use shared::{BuildingSpec, BuildingType};

use crate::viewport::mesh::{cube, cylinder};

use super::palette::{TypeStyle, DOCK_COLOR, HELIPAD_COLOR, MARKING_COLOR, TRUSS_COLOR};
use super::{MeshGroup, Part, PartKind};

pub fn build_roof(spec: &BuildingSpec, style: &TypeStyle) -> MeshGroup {
    let mut parts = Vec::new();
    let total_height = spec.total_height();
    let (w, d) = (spec.width, spec.depth);
    let roof_color = style.palette.roof;

    if spec.building_type == BuildingType::Industrial {
        // Sloped warehouse roof with exposed trusses
        parts.push(Part::opaque(
            "Roof Slab",
            PartKind::Roof,
            cube(w + 0.5, 0.3, d + 0.5, roof_color)
                .rotated_x(0.1)
                .translated(Vec3::new(0.0, total_height + 0.15, 0.0)),
        ));

        let truss_count = 5;
        for i in 0..truss_count {
            let x = -w / 2.0 + i as f32 * w / (truss_count - 1) as f32;
            parts.push(Part::opaque(
                format!("Roof Truss {}", i + 1),
                PartKind::Truss,
                cube(0.2, 1.5, d, TRUSS_COLOR)
                    .translated(Vec3::new(x, total_height + 0.75, 0.0)),
            ));
        }
    } else {
        parts.push(Part::opaque(
            "Roof Slab",
            PartKind::Roof,
            cube(w + 0.5, 0.4, d + 0.5, roof_color)
                .translated(Vec3::new(0.0, total_height + 0.2, 0.0)),
        ));
    }

    if style.has_parapet {
        let height = if spec.building_type == BuildingType::Institutional {
            1.5
        } else {
            1.2
        };
        let thickness = 0.2;
        let y = total_height + height / 2.0;

        let walls: [(&str, [f32; 3], Vec3); 4] = [
            ("Parapet N", [w + 0.5, height, thickness], Vec3::new(0.0, y, -d / 2.0 - 0.25)),
            ("Parapet S", [w + 0.5, height, thickness], Vec3::new(0.0, y, d / 2.0 + 0.25)),
            ("Parapet W", [thickness, height, d + 0.5], Vec3::new(-w / 2.0 - 0.25, y, 0.0)),
            ("Parapet E", [thickness, height, d + 0.5], Vec3::new(w / 2.0 + 0.25, y, 0.0)),
        ];
        for (label, size, pos) in walls {
            parts.push(Part::opaque(
                label,
                PartKind::Parapet,
                cube(size[0], size[1], size[2], style.palette.column).translated(pos),
            ));
        }
    }

    MeshGroup {
        name: "roof",
        parts,
    }
}

/// Type-specific extras: roof helipad for institutional, loading dock for
/// industrial. `None` for types without decoration.
pub fn build_decoration(spec: &BuildingSpec, _style: &TypeStyle) -> Option<MeshGroup> {
    let total_height = spec.total_height();

    match spec.building_type {
        BuildingType::Institutional => {
            let mut parts = vec![Part::opaque(
                "Helipad",
                PartKind::Helipad,
                cylinder(3.0, 0.2, 32, HELIPAD_COLOR)
                    .translated(Vec3::new(0.0, total_height + 0.5, 0.0)),
            )];

            // Painted H marking, flat on the pad
            let marking_y = total_height + 0.62;
            let bars: [(&str, [f32; 3], Vec3); 3] = [
                ("Helipad Marking L", [0.3, 0.25, 2.0], Vec3::new(-0.8, marking_y, 0.0)),
                ("Helipad Marking R", [0.3, 0.25, 2.0], Vec3::new(0.8, marking_y, 0.0)),
                ("Helipad Marking Bar", [1.6, 0.25, 0.3], Vec3::new(0.0, marking_y, 0.0)),
            ];
            for (label, size, pos) in bars {
                parts.push(Part::opaque(
                    label,
                    PartKind::Helipad,
                    cube(size[0], size[1], size[2], MARKING_COLOR).translated(pos),
                ));
            }

            Some(MeshGroup {
                name: "decoration",
                parts,
            })
        }
        BuildingType::Industrial => Some(MeshGroup {
            name: "decoration",
            parts: vec![Part::opaque(
                "Loading Dock",
                PartKind::Dock,
                cube(spec.width * 0.3, 2.0, 3.0, DOCK_COLOR)
                    .translated(Vec3::new(0.0, 1.0, spec.depth / 2.0 + 1.5)),
            )],
        }),
        BuildingType::Residential | BuildingType::Commercial => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::bounds::Aabb;

    fn spec(building_type: BuildingType, storeys: u32) -> BuildingSpec {
        BuildingSpec {
            storeys,
            width: 30.0,
            depth: 24.0,
            floor_height: 3.5,
            building_type,
        }
    }

    #[test]
    fn test_flat_roof_above_top_slab() {
        let s = spec(BuildingType::Commercial, 8);
        let g = build_roof(&s, &TypeStyle::for_type(s.building_type));
        let roof = g.parts.iter().find(|p| p.kind == PartKind::Roof).unwrap();
        let b = Aabb::from_mesh(&roof.mesh);
        assert!(b.min.y >= s.total_height() - 1e-4);
    }

    #[test]
    fn test_industrial_roof_has_trusses_no_parapet() {
        let s = spec(BuildingType::Industrial, 2);
        let g = build_roof(&s, &TypeStyle::for_type(s.building_type));
        assert_eq!(g.parts.iter().filter(|p| p.kind == PartKind::Truss).count(), 5);
        assert!(!g.parts.iter().any(|p| p.kind == PartKind::Parapet));
    }

    #[test]
    fn test_institutional_parapet_taller() {
        let s = spec(BuildingType::Institutional, 6);
        let g = build_roof(&s, &TypeStyle::for_type(s.building_type));
        let parapet = g.parts.iter().find(|p| p.kind == PartKind::Parapet).unwrap();
        let b = Aabb::from_mesh(&parapet.mesh);
        assert!((b.size().y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_decoration_per_type() {
        let inst = spec(BuildingType::Institutional, 6);
        let g = build_decoration(&inst, &TypeStyle::for_type(inst.building_type)).unwrap();
        // Pad plus the three H-marking bars
        assert_eq!(g.parts.len(), 4);
        assert!(g.parts.iter().all(|p| p.kind == PartKind::Helipad));

        let ind = spec(BuildingType::Industrial, 2);
        let g = build_decoration(&ind, &TypeStyle::for_type(ind.building_type)).unwrap();
        assert_eq!(g.parts.len(), 1);
        assert_eq!(g.parts[0].kind, PartKind::Dock);

        let res = spec(BuildingType::Residential, 8);
        assert!(build_decoration(&res, &TypeStyle::for_type(res.building_type)).is_none());
    }

    #[test]
    fn test_dock_extends_past_facade() {
        let s = spec(BuildingType::Industrial, 2);
        let g = build_decoration(&s, &TypeStyle::for_type(s.building_type)).unwrap();
        let b = Aabb::from_mesh(&g.parts[0].mesh);
        assert!(b.max.z > s.depth / 2.0);
    }
}
