//! Curtain wall facade: glass panels with vertical and horizontal mullions.

use glam::Vec3;
use shared::{BuildingSpec, BuildingType};

use crate::viewport::mesh::cube;

use super::palette::TypeStyle;
use super::{MeshGroup, Part, PartKind};

const PANEL_THICKNESS: f32 = 0.05;
const WALL_OFFSET: f32 = 0.05;

pub fn build_facade(spec: &BuildingSpec, style: &TypeStyle) -> MeshGroup {
    let mut parts = Vec::new();
    let total_height = spec.total_height();
    let (w, d) = (spec.width, spec.depth);
    let industrial = spec.building_type == BuildingType::Industrial;

    let opacity = style.glass_opacity(spec.building_type);
    let glass = style.palette.glass;
    let mullion = style.palette.mullion;
    let panel_h = total_height - 1.0;
    let mid_y = total_height / 2.0;

    // Four glass walls, inset slightly from the slab edge
    let walls: [(&str, [f32; 3], Vec3); 4] = [
        ("Glass Wall N", [w - 0.8, panel_h, PANEL_THICKNESS], Vec3::new(0.0, mid_y, -d / 2.0 + WALL_OFFSET)),
        ("Glass Wall S", [w - 0.8, panel_h, PANEL_THICKNESS], Vec3::new(0.0, mid_y, d / 2.0 - WALL_OFFSET)),
        ("Glass Wall W", [PANEL_THICKNESS, panel_h, d - 0.8], Vec3::new(-w / 2.0 + WALL_OFFSET, mid_y, 0.0)),
        ("Glass Wall E", [PANEL_THICKNESS, panel_h, d - 0.8], Vec3::new(w / 2.0 - WALL_OFFSET, mid_y, 0.0)),
    ];
    for (label, size, pos) in walls {
        parts.push(Part::translucent(
            label,
            PartKind::CurtainWall,
            cube(size[0], size[1], size[2], glass).translated(pos),
            opacity,
        ));
    }

    // Vertical mullions on the long facades; coarser spacing for industrial
    let mullion_count = if industrial {
        4
    } else if style.large_windows {
        10
    } else {
        8
    };
    let mullion_size = if industrial { 0.12 } else { 0.08 };

    for i in 0..=mullion_count {
        let x = -w / 2.0 + i as f32 * w / mullion_count as f32;
        for (face, z) in [("N", -d / 2.0), ("S", d / 2.0)] {
            parts.push(Part::opaque(
                format!("Mullion {}{}", face, i),
                PartKind::Mullion,
                cube(mullion_size, total_height, mullion_size, mullion)
                    .translated(Vec3::new(x, mid_y, z)),
            ));
        }
    }

    // Horizontal mullions at intermediate floor lines
    for floor in 1..spec.storeys {
        let y = floor as f32 * spec.floor_height;
        for (face, z) in [("N", -d / 2.0), ("S", d / 2.0)] {
            parts.push(Part::opaque(
                format!("Floor Mullion {}{}", face, floor),
                PartKind::Mullion,
                cube(w, 0.12, 0.12, mullion).translated(Vec3::new(0.0, y, z)),
            ));
        }
    }

    MeshGroup {
        name: "facade",
        parts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facade_for(building_type: BuildingType, storeys: u32) -> MeshGroup {
        let spec = BuildingSpec {
            storeys,
            width: 25.0,
            depth: 20.0,
            floor_height: 3.5,
            building_type,
        };
        let style = TypeStyle::for_type(building_type);
        build_facade(&spec, &style)
    }

    #[test]
    fn test_wall_and_mullion_counts() {
        let g = facade_for(BuildingType::Residential, 8);
        let walls = g.parts.iter().filter(|p| p.kind == PartKind::CurtainWall).count();
        assert_eq!(walls, 4);

        // 9 vertical mullions per long face, plus 7 horizontal per face
        let mullions = g.parts.iter().filter(|p| p.kind == PartKind::Mullion).count();
        assert_eq!(mullions, 9 * 2 + 7 * 2);
    }

    #[test]
    fn test_industrial_sparser_facade() {
        let g = facade_for(BuildingType::Industrial, 2);
        let mullions = g.parts.iter().filter(|p| p.kind == PartKind::Mullion).count();
        // 5 vertical per face, 1 horizontal per face
        assert_eq!(mullions, 5 * 2 + 2);

        let glass = g.parts.iter().find(|p| p.kind == PartKind::CurtainWall).unwrap();
        assert!((glass.opacity - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_single_storey_has_no_floor_mullions() {
        let g = facade_for(BuildingType::Residential, 1);
        assert!(!g.parts.iter().any(|p| p.label.starts_with("Floor Mullion")));
    }
}
