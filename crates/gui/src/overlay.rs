//! Analysis overlays: translucent geometry superimposed on the model to
//! visualize rule engine outputs. Placements are illustrative and fixed in
//! model space, independent of the loaded building's dimensions.

use glam::Vec3;

use crate::build::palette::rgb;
use crate::build::{Part, PartKind};
use crate::viewport::mesh::{cube, cylinder, sphere};

/// Which overlay a toolbar toggle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    ShearWalls,
    Foundation,
    RiskZone,
}

impl OverlayKind {
    pub fn label(&self) -> &'static str {
        match self {
            OverlayKind::ShearWalls => "Shear Walls",
            OverlayKind::Foundation => "Foundation",
            OverlayKind::RiskZone => "Risk Zone",
        }
    }
}

const SHEAR_WALL_COLOR: u32 = 0x808080;
const FOUNDATION_COLOR: u32 = 0x505050;
const RISK_HIGH_COLOR: u32 = 0xff0000;
const RISK_MODERATE_COLOR: u32 = 0xffa500;

/// Suggested shear wall placement: four perimeter panels plus a core wall
pub fn shear_wall_overlay() -> Vec<Part> {
    let color = rgb(SHEAR_WALL_COLOR);
    let positions = [
        (-5.0, -5.0),
        (-5.0, 5.0),
        (5.0, -5.0),
        (5.0, 5.0),
        (0.0, 0.0),
    ];

    positions
        .iter()
        .enumerate()
        .map(|(i, &(x, z))| {
            Part::translucent(
                format!("Shear Wall {}", i + 1),
                PartKind::Overlay,
                cube(2.0, 10.0, 0.2, color).translated(Vec3::new(x, 5.0, z)),
                0.4,
            )
        })
        .collect()
}

/// Foundation scheme suggested by the soil-structure module. The string is
/// the module's `foundation_type` verbatim.
pub fn foundation_overlay(foundation_type: &str) -> Vec<Part> {
    let color = rgb(FOUNDATION_COLOR);
    let mut parts = Vec::new();

    if foundation_type.contains("Piled") {
        parts.push(Part::translucent(
            "Pile Cap",
            PartKind::Overlay,
            cube(12.0, 0.5, 12.0, color).translated(Vec3::new(0.0, -0.25, 0.0)),
            0.5,
        ));
        for x in [-4.0, 0.0, 4.0] {
            for z in [-4.0, 0.0, 4.0] {
                parts.push(Part::translucent(
                    format!("Pile ({:+.0},{:+.0})", x, z),
                    PartKind::Overlay,
                    cylinder(0.2, 5.0, 12, color).translated(Vec3::new(x, -2.75, z)),
                    0.5,
                ));
            }
        }
    } else if foundation_type.contains("Isolated") {
        for x in [-5.0, 0.0, 5.0] {
            for z in [-5.0, 0.0, 5.0] {
                parts.push(Part::translucent(
                    format!("Footing ({:+.0},{:+.0})", x, z),
                    PartKind::Overlay,
                    cube(2.0, 0.5, 2.0, color).translated(Vec3::new(x, -0.25, z)),
                    0.5,
                ));
            }
        }
    } else {
        parts.push(Part::translucent(
            "Raft Slab",
            PartKind::Overlay,
            cube(12.0, 0.8, 12.0, color).translated(Vec3::new(0.0, -0.4, 0.0)),
            0.5,
        ));
    }

    parts
}

/// Risk band around the building base, colored by the screening verdict
pub fn risk_overlay(risk_status: &str) -> Vec<Part> {
    let color = if risk_status == "High Risk" {
        rgb(RISK_HIGH_COLOR)
    } else {
        rgb(RISK_MODERATE_COLOR)
    };

    let mut parts = vec![Part::translucent(
        "Risk Band",
        PartKind::Overlay,
        cube(11.0, 3.0, 11.0, color).translated(Vec3::new(0.0, 1.5, 0.0)),
        0.3,
    )];

    for (i, (x, z)) in [(-5.5, -5.5), (-5.5, 5.5), (5.5, -5.5), (5.5, 5.5)]
        .into_iter()
        .enumerate()
    {
        parts.push(Part::translucent(
            format!("Risk Marker {}", i + 1),
            PartKind::Overlay,
            sphere(0.5, 12, 16, color).translated(Vec3::new(x, 1.5, z)),
            0.3,
        ));
    }

    parts
}

/// Generate the parts for one overlay kind from the current analysis strings
pub fn overlay_parts(kind: OverlayKind, foundation_type: &str, risk_status: &str) -> Vec<Part> {
    match kind {
        OverlayKind::ShearWalls => shear_wall_overlay(),
        OverlayKind::Foundation => foundation_overlay(foundation_type),
        OverlayKind::RiskZone => risk_overlay(risk_status),
    }
}
