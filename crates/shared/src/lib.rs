use serde::{Deserialize, Serialize};

pub mod registry;
pub mod rules;

pub use registry::{building_by_id, building_registry, buildings_by_type, BuildingEntry};
pub use rules::{run_analysis, AnalysisResults};

/// Building occupancy category driving the geometry style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    #[default]
    Residential,
    Commercial,
    Institutional,
    Industrial,
}

impl BuildingType {
    /// Parse a registry/UI string; unknown values fall back to Residential
    pub fn parse(s: &str) -> Self {
        match s {
            "commercial" => BuildingType::Commercial,
            "institutional" => BuildingType::Institutional,
            "industrial" => BuildingType::Industrial,
            _ => BuildingType::Residential,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuildingType::Residential => "Residential",
            BuildingType::Commercial => "Commercial",
            BuildingType::Institutional => "Institutional",
            BuildingType::Industrial => "Industrial",
        }
    }

    pub fn all() -> &'static [BuildingType] {
        &[
            BuildingType::Residential,
            BuildingType::Commercial,
            BuildingType::Institutional,
            BuildingType::Industrial,
        ]
    }
}

/// Seismic zone per IS 1893 classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeismicZone {
    #[serde(rename = "zone-ii")]
    Ii,
    #[serde(rename = "zone-iii")]
    Iii,
    #[default]
    #[serde(rename = "zone-iv")]
    Iv,
    #[serde(rename = "zone-v")]
    V,
}

impl SeismicZone {
    /// Design peak ground acceleration in g
    pub fn pga(&self) -> f64 {
        match self {
            SeismicZone::Ii => 0.10,
            SeismicZone::Iii => 0.16,
            SeismicZone::Iv => 0.24,
            SeismicZone::V => 0.36,
        }
    }

    /// Roman numeral as shown in the registry
    pub fn numeral(&self) -> &'static str {
        match self {
            SeismicZone::Ii => "II",
            SeismicZone::Iii => "III",
            SeismicZone::Iv => "IV",
            SeismicZone::V => "V",
        }
    }

    /// Wire name used by the rule engine ("zone-iv")
    pub fn key(&self) -> &'static str {
        match self {
            SeismicZone::Ii => "zone-ii",
            SeismicZone::Iii => "zone-iii",
            SeismicZone::Iv => "zone-iv",
            SeismicZone::V => "zone-v",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeismicZone::Ii => "Zone II (Low)",
            SeismicZone::Iii => "Zone III (Moderate)",
            SeismicZone::Iv => "Zone IV (High)",
            SeismicZone::V => "Zone V (Very High)",
        }
    }

    pub fn all() -> &'static [SeismicZone] {
        &[
            SeismicZone::Ii,
            SeismicZone::Iii,
            SeismicZone::Iv,
            SeismicZone::V,
        ]
    }
}

/// Soil classification for the SSI module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilProfile {
    Hard,
    #[default]
    Medium,
    Soft,
}

impl SoilProfile {
    pub fn label(&self) -> &'static str {
        match self {
            SoilProfile::Hard => "Type I (Hard/Rock)",
            SoilProfile::Medium => "Type II (Medium/Stiff)",
            SoilProfile::Soft => "Type III (Soft)",
        }
    }

    pub fn all() -> &'static [SoilProfile] {
        &[SoilProfile::Hard, SoilProfile::Medium, SoilProfile::Soft]
    }
}

/// Groundwater table depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Groundwater {
    Shallow,
    #[default]
    Deep,
}

impl Groundwater {
    pub fn label(&self) -> &'static str {
        match self {
            Groundwater::Shallow => "Shallow",
            Groundwater::Deep => "Deep",
        }
    }

    pub fn all() -> &'static [Groundwater] {
        &[Groundwater::Shallow, Groundwater::Deep]
    }
}

/// Lateral load resisting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralSystem {
    #[default]
    Smrf,
    Wall,
    Braced,
}

impl StructuralSystem {
    pub fn label(&self) -> &'static str {
        match self {
            StructuralSystem::Smrf => "SMRF (Moment Frame)",
            StructuralSystem::Wall => "Shear Wall-Frame Dual",
            StructuralSystem::Braced => "Concentrically Braced",
        }
    }

    pub fn all() -> &'static [StructuralSystem] {
        &[
            StructuralSystem::Smrf,
            StructuralSystem::Wall,
            StructuralSystem::Braced,
        ]
    }
}

/// Input record consumed by all rule-engine modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub zone: SeismicZone,
    pub soil: SoilProfile,
    pub storeys: u32,
    pub structural_system: StructuralSystem,
    pub regularity: bool,
    pub groundwater: Groundwater,
}

impl Default for AnalysisInput {
    fn default() -> Self {
        Self {
            zone: SeismicZone::Iv,
            soil: SoilProfile::Medium,
            storeys: 12,
            structural_system: StructuralSystem::Smrf,
            regularity: true,
            groundwater: Groundwater::Deep,
        }
    }
}

/// Parameters for the procedural building model.
///
/// Immutable per render: the same spec always produces a structurally
/// identical part list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub storeys: u32,
    pub width: f32,
    pub depth: f32,
    pub floor_height: f32,
    pub building_type: BuildingType,
}

impl BuildingSpec {
    pub const DEFAULT_FLOOR_HEIGHT: f32 = 3.5;

    /// Total structural height above grade
    pub fn total_height(&self) -> f32 {
        self.storeys as f32 * self.floor_height
    }

    /// Derive a spec from a registry entry, substituting the plan
    /// dimensions by storey count the way the demo viewer does.
    pub fn from_entry(entry: &BuildingEntry) -> Self {
        let (width, depth) = plan_dimensions(entry.storeys, entry.building_type);
        Self {
            storeys: entry.storeys,
            width,
            depth,
            floor_height: entry.column_height,
            building_type: entry.building_type,
        }
    }
}

impl Default for BuildingSpec {
    fn default() -> Self {
        Self {
            storeys: 8,
            width: 25.0,
            depth: 20.0,
            floor_height: Self::DEFAULT_FLOOR_HEIGHT,
            building_type: BuildingType::Residential,
        }
    }
}

/// Plan footprint lookup: smaller towers get larger footprints
fn plan_dimensions(storeys: u32, building_type: BuildingType) -> (f32, f32) {
    if storeys <= 3 {
        if building_type == BuildingType::Industrial {
            (35.0, 30.0)
        } else {
            (30.0, 25.0)
        }
    } else if storeys <= 6 {
        if building_type == BuildingType::Institutional {
            (28.0, 22.0)
        } else {
            (22.0, 18.0)
        }
    } else if storeys <= 10 {
        (18.0, 15.0)
    } else {
        (15.0, 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_type_parse_fallback() {
        assert_eq!(BuildingType::parse("commercial"), BuildingType::Commercial);
        assert_eq!(BuildingType::parse("hospital"), BuildingType::Residential);
        assert_eq!(BuildingType::parse(""), BuildingType::Residential);
    }

    #[test]
    fn test_zone_serde_wire_names() {
        let json = serde_json::to_string(&SeismicZone::Iv).unwrap();
        assert_eq!(json, "\"zone-iv\"");
        let back: SeismicZone = serde_json::from_str("\"zone-v\"").unwrap();
        assert_eq!(back, SeismicZone::V);
    }

    #[test]
    fn test_total_height() {
        let spec = BuildingSpec {
            storeys: 8,
            floor_height: 3.5,
            ..BuildingSpec::default()
        };
        assert!((spec.total_height() - 28.0).abs() < 1e-6);
    }

    #[test]
    fn test_plan_dimensions_by_storeys() {
        assert_eq!(plan_dimensions(2, BuildingType::Industrial), (35.0, 30.0));
        assert_eq!(plan_dimensions(3, BuildingType::Residential), (30.0, 25.0));
        assert_eq!(plan_dimensions(6, BuildingType::Institutional), (28.0, 22.0));
        assert_eq!(plan_dimensions(6, BuildingType::Commercial), (22.0, 18.0));
        assert_eq!(plan_dimensions(8, BuildingType::Commercial), (18.0, 15.0));
        assert_eq!(plan_dimensions(15, BuildingType::Residential), (15.0, 12.0));
    }

    #[test]
    fn test_default_input_matches_demo() {
        let input = AnalysisInput::default();
        assert_eq!(input.zone, SeismicZone::Iv);
        assert_eq!(input.soil, SoilProfile::Medium);
        assert_eq!(input.storeys, 12);
        assert_eq!(input.structural_system, StructuralSystem::Smrf);
        assert!(input.regularity);
        assert_eq!(input.groundwater, Groundwater::Deep);
    }
}
