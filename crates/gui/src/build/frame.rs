//! Structural frame: column grid, floor slabs, edge beams, foundation podium.

use glam::Vec3;
use shared::{BuildingSpec, BuildingType};

use crate::viewport::mesh::cube;

use super::palette::{TypeStyle, FOUNDATION_COLOR};
use super::{MeshGroup, Part, PartKind};

const SLAB_THICKNESS: f32 = 0.3;

pub fn build_frame(spec: &BuildingSpec, style: &TypeStyle) -> MeshGroup {
    let mut parts = Vec::new();
    let total_height = spec.total_height();
    let (w, d) = (spec.width, spec.depth);
    let industrial = spec.building_type == BuildingType::Industrial;

    // Column grid, evenly spread across the plan
    let grid = style.grid;
    let size = style.column_size;
    for i in 0..grid {
        for j in 0..grid {
            let x = -w / 2.0 + i as f32 * w / (grid - 1) as f32;
            let z = -d / 2.0 + j as f32 * d / (grid - 1) as f32;
            parts.push(Part::opaque(
                format!("Column {}x{}", i + 1, j + 1),
                PartKind::Column,
                cube(size, total_height, size, style.palette.column)
                    .translated(Vec3::new(x, total_height / 2.0, z)),
            ));
        }
    }

    // One slab per floor level, ground included
    for floor in 0..=spec.storeys {
        let y = floor as f32 * spec.floor_height;
        let label = if floor == 0 {
            "Ground Slab".to_string()
        } else {
            format!("Floor Slab {}", floor)
        };
        parts.push(Part::opaque(
            label,
            PartKind::FloorSlab,
            cube(w, SLAB_THICKNESS, d, style.palette.slab).translated(Vec3::new(0.0, y, 0.0)),
        ));

        // Perimeter edge beams below the slab above
        if floor < spec.storeys {
            let beam_h = if industrial { 0.8 } else { 0.6 };
            let beam_w = if industrial { 0.5 } else { 0.4 };

            for z in [-d / 2.0, d / 2.0] {
                parts.push(Part::opaque(
                    format!("Edge Beam F{} Z{:+.0}", floor, z),
                    PartKind::EdgeBeam,
                    cube(w, beam_h, beam_w, style.palette.column)
                        .translated(Vec3::new(0.0, y + beam_h / 2.0, z)),
                ));
            }
            for x in [-w / 2.0, w / 2.0] {
                parts.push(Part::opaque(
                    format!("Edge Beam F{} X{:+.0}", floor, x),
                    PartKind::EdgeBeam,
                    cube(beam_w, beam_h, d, style.palette.column)
                        .translated(Vec3::new(x, y + beam_h / 2.0, 0.0)),
                ));
            }
        }
    }

    // Foundation podium, deeper for industrial loads
    let foundation_height = if industrial { 2.0 } else { 1.5 };
    parts.push(Part::opaque(
        "Foundation",
        PartKind::Foundation,
        cube(w + 2.0, foundation_height, d + 2.0, FOUNDATION_COLOR)
            .translated(Vec3::new(0.0, -foundation_height / 2.0, 0.0)),
    ));

    MeshGroup {
        name: "frame",
        parts,
    }
}
