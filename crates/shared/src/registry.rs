//! Building registry: central configuration for the demo models.
//!
//! Acts as a frontend-only database replacement; entries are consumed as
//! configuration, never parsed from a wire format.

use serde::{Deserialize, Serialize};

use crate::{BuildingType, SeismicZone};

/// One demo building with its default visualization dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub seismic_zone: SeismicZone,
    pub storeys: u32,
    pub building_type: BuildingType,
    pub ifc_path: String,
    pub thumbnail: String,
    pub color: String,
    pub footing_length: f32,
    pub footing_width: f32,
    pub footing_depth: f32,
    pub column_width: f32,
    pub column_depth: f32,
    pub column_height: f32,
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    seismic_zone: SeismicZone,
    storeys: u32,
    building_type: BuildingType,
    ifc_path: &str,
    thumbnail: &str,
    color: &str,
    footing: [f32; 3],
    column: [f32; 3],
) -> BuildingEntry {
    BuildingEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        seismic_zone,
        storeys,
        building_type,
        ifc_path: ifc_path.to_string(),
        thumbnail: thumbnail.to_string(),
        color: color.to_string(),
        footing_length: footing[0],
        footing_width: footing[1],
        footing_depth: footing[2],
        column_width: column[0],
        column_depth: column[1],
        column_height: column[2],
    }
}

/// The six demo buildings
pub fn building_registry() -> Vec<BuildingEntry> {
    vec![
        entry(
            "residential-tower",
            "Residential Tower",
            "15-storey residential building with shear walls",
            SeismicZone::Iv,
            15,
            BuildingType::Residential,
            "/demo/residential_tower_zone_iv.ifc",
            "🏢",
            "#4CAF50",
            [4.0, 4.0, 2.0],
            [0.8, 0.8, 3.5],
        ),
        entry(
            "commercial-complex",
            "Commercial Complex",
            "Multi-storey commercial structure with moment frames",
            SeismicZone::Iii,
            8,
            BuildingType::Commercial,
            "/demo/commercial_complex_zone_iii.ifc",
            "🏬",
            "#2196F3",
            [5.0, 5.0, 2.5],
            [1.0, 1.0, 4.0],
        ),
        entry(
            "hospital-building",
            "Hospital Building",
            "Critical facility with enhanced seismic design",
            SeismicZone::V,
            6,
            BuildingType::Institutional,
            "/demo/hospital_zone_v.ifc",
            "🏥",
            "#FF9800",
            [6.0, 6.0, 3.0],
            [1.2, 1.2, 4.5],
        ),
        entry(
            "school-building",
            "School Building",
            "Educational facility with regular structural layout",
            SeismicZone::Ii,
            4,
            BuildingType::Institutional,
            "/demo/school_zone_ii.ifc",
            "🏫",
            "#9C27B0",
            [3.5, 3.5, 1.8],
            [0.7, 0.7, 3.5],
        ),
        entry(
            "industrial-warehouse",
            "Industrial Warehouse",
            "Large span industrial structure with steel frames",
            SeismicZone::Iii,
            2,
            BuildingType::Industrial,
            "/demo/warehouse_zone_iii.ifc",
            "🏭",
            "#FF5722",
            [8.0, 8.0, 3.5],
            [1.5, 1.5, 7.0],
        ),
        entry(
            "demo-building",
            "Demo Building",
            "Simple demonstration model for learning",
            SeismicZone::Iii,
            3,
            BuildingType::Residential,
            "/demo/demo_building_zone_iii.ifc",
            "🏗️",
            "#607D8B",
            [3.0, 3.0, 1.5],
            [0.6, 0.6, 3.0],
        ),
    ]
}

/// Look up a building by id
pub fn building_by_id(id: &str) -> Option<BuildingEntry> {
    building_registry().into_iter().find(|b| b.id == id)
}

/// Filter buildings by type; `None` returns all
pub fn buildings_by_type(building_type: Option<BuildingType>) -> Vec<BuildingEntry> {
    match building_type {
        None => building_registry(),
        Some(t) => building_registry()
            .into_iter()
            .filter(|b| b.building_type == t)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_six_entries() {
        assert_eq!(building_registry().len(), 6);
    }

    #[test]
    fn test_building_by_id() {
        let b = building_by_id("hospital-building").unwrap();
        assert_eq!(b.name, "Hospital Building");
        assert_eq!(b.storeys, 6);
        assert_eq!(b.seismic_zone, SeismicZone::V);
        assert_eq!(b.building_type, BuildingType::Institutional);
        assert!((b.column_height - 4.5).abs() < 1e-6);

        assert!(building_by_id("no-such-building").is_none());
    }

    #[test]
    fn test_buildings_by_type() {
        let institutional = buildings_by_type(Some(BuildingType::Institutional));
        assert_eq!(institutional.len(), 2);
        assert_eq!(buildings_by_type(None).len(), 6);
        assert_eq!(buildings_by_type(Some(BuildingType::Industrial)).len(), 1);
    }

    #[test]
    fn test_entries_roundtrip_json() {
        let all = building_registry();
        let json = serde_json::to_string(&all).unwrap();
        let back: Vec<BuildingEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(all, back);
    }
}
