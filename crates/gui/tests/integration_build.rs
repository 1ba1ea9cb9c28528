//! Integration tests for the building generator.
//!
//! Tests end-to-end: BuildingSpec -> build_building -> validate mesh output.

use seisview_gui_lib::build::{build_building, InvalidSpec, PartKind};
use seisview_gui_lib::fixtures::*;
use seisview_gui_lib::validation::MeshValidator;
use shared::{BuildingSpec, BuildingType};

#[test]
fn test_residential_end_to_end() {
    let model = build_building(&residential_spec()).unwrap();

    assert!(model.part_count() > 0);
    for part in model.parts() {
        let v = MeshValidator::new(&part.mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "{}: {:?}", part.label, errors);
        assert!(v.vertex_count() > 0);
        assert!(v.triangle_count() > 0);
    }
}

#[test]
fn test_every_type_builds_valid_meshes() {
    for &t in BuildingType::all() {
        let model = build_building(&spec(5, t)).unwrap();
        for part in model.parts() {
            let errors = MeshValidator::new(&part.mesh).validate_all();
            assert!(errors.is_empty(), "{:?} {}: {:?}", t, part.label, errors);
        }
    }
}

#[test]
fn test_slab_count_scales_with_storeys() {
    for storeys in [1, 3, 8, 20] {
        let model = build_building(&spec(storeys, BuildingType::Residential)).unwrap();
        assert_eq!(model.count_kind(PartKind::FloorSlab), storeys as usize + 1);
    }
}

#[test]
fn test_bounds_track_total_height() {
    let spec = hospital_spec();
    let model = build_building(&spec).unwrap();

    // Parapet and helipad sit above the roof slab
    assert!(model.bounds.max.y >= spec.total_height());
    // Foundation extends below grade
    assert!(model.bounds.min.y < 0.0);
    // Footprint stays within the foundation slab (spec plan + 2m apron)
    assert!(model.bounds.size().x <= spec.width + 2.0 + 1e-3);
    assert!(model.bounds.size().z <= spec.depth + 2.0 + 1e-3);
}

#[test]
fn test_same_spec_same_tree() {
    let a = build_building(&warehouse_spec()).unwrap();
    let b = build_building(&warehouse_spec()).unwrap();

    assert_eq!(a.part_count(), b.part_count());
    for (pa, pb) in a.parts().zip(b.parts()) {
        assert_eq!(pa.label, pb.label);
        assert_eq!(pa.kind, pb.kind);
        assert_eq!(pa.mesh.vertices.len(), pb.mesh.vertices.len());
    }
}

#[test]
fn test_decoration_matches_type() {
    let hospital = build_building(&hospital_spec()).unwrap();
    assert!(hospital.count_kind(PartKind::Helipad) > 0);

    let warehouse = build_building(&warehouse_spec()).unwrap();
    assert_eq!(warehouse.count_kind(PartKind::Dock), 1);
    assert_eq!(warehouse.count_kind(PartKind::Helipad), 0);
}

#[test]
fn test_invalid_specs_rejected() {
    let zero = BuildingSpec {
        storeys: 0,
        ..BuildingSpec::default()
    };
    assert!(matches!(
        build_building(&zero),
        Err(InvalidSpec::StoreyCount(0))
    ));

    let too_tall = BuildingSpec {
        storeys: 201,
        ..BuildingSpec::default()
    };
    assert!(build_building(&too_tall).is_err());

    let bad_width = BuildingSpec {
        width: -1.0,
        ..BuildingSpec::default()
    };
    assert!(matches!(
        build_building(&bad_width),
        Err(InvalidSpec::Dimension("width", _))
    ));
}

#[test]
fn test_registry_entries_all_build() {
    for entry in shared::building_registry() {
        let spec = BuildingSpec::from_entry(&entry);
        let model = build_building(&spec).unwrap();
        assert!(model.part_count() > 0, "{} built empty", entry.id);
        assert_eq!(model.building_type, entry.building_type);
    }
}
