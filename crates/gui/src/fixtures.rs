//! Factory functions for creating test data.
//!
//! Convenient helpers to construct specs, inputs, and registry entries used
//! across unit and integration tests.

use shared::{
    building_by_id, AnalysisInput, BuildingEntry, BuildingSpec, BuildingType, Groundwater,
    SeismicZone, SoilProfile, StructuralSystem,
};

// ── Spec factories ──────────────────────────────────────────────

/// Spec with explicit storeys and type, default plan dimensions.
pub fn spec(storeys: u32, building_type: BuildingType) -> BuildingSpec {
    BuildingSpec {
        storeys,
        building_type,
        ..BuildingSpec::default()
    }
}

/// The stock 8-storey residential demo spec.
pub fn residential_spec() -> BuildingSpec {
    spec(8, BuildingType::Residential)
}

/// A 2-storey warehouse spec.
pub fn warehouse_spec() -> BuildingSpec {
    BuildingSpec {
        storeys: 2,
        width: 35.0,
        depth: 30.0,
        building_type: BuildingType::Industrial,
        ..BuildingSpec::default()
    }
}

/// A 6-storey hospital spec (institutional style).
pub fn hospital_spec() -> BuildingSpec {
    BuildingSpec {
        storeys: 6,
        width: 28.0,
        depth: 22.0,
        floor_height: 4.5,
        building_type: BuildingType::Institutional,
    }
}

// ── Input factories ─────────────────────────────────────────────

/// Analysis input with explicit zone and storeys, defaults elsewhere.
pub fn input(zone: SeismicZone, storeys: u32) -> AnalysisInput {
    AnalysisInput {
        zone,
        storeys,
        ..AnalysisInput::default()
    }
}

/// Worst-case input: zone V, soft soil, shallow water, irregular tall tower.
pub fn severe_input() -> AnalysisInput {
    AnalysisInput {
        zone: SeismicZone::V,
        soil: SoilProfile::Soft,
        storeys: 35,
        structural_system: StructuralSystem::Smrf,
        regularity: false,
        groundwater: Groundwater::Shallow,
    }
}

// ── Registry helpers ────────────────────────────────────────────

/// Fetch a registry entry that is guaranteed to exist.
pub fn entry(id: &str) -> BuildingEntry {
    building_by_id(id).unwrap_or_else(|| panic!("fixture entry '{}' missing from registry", id))
}
