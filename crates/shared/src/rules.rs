//! Engineering rule engine.
//!
//! Deterministic frontend-only logic for structural and seismic analysis
//! simulations. All five modules are stateless functions over
//! [`AnalysisInput`]; scores and thresholds are demo constants, not code
//! provisions.

use serde::{Deserialize, Serialize};

use crate::{AnalysisInput, Groundwater, SoilProfile, StructuralSystem, SeismicZone};

/// Module 1: performance-based design screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_status: String,
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
}

/// Module 2: tall building provisions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallBuildingResult {
    pub status: String,
    pub slenderness_ratio: f64,
    pub sensitivity: String,
    pub suggestions: Vec<String>,
}

/// Module 3: shear wall requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallsResult {
    pub density_requirement: String,
    pub placement_status: String,
    pub suggestion: String,
}

/// Module 4: soil-structure interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationResult {
    pub foundation_type: String,
    pub ssi_effect: String,
    pub liquefaction_risk: String,
    pub reason: String,
}

/// Module 5: ground motion parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundMotionResult {
    pub expected_pga: String,
    pub spectrum_type: String,
    pub damping: String,
    pub note: String,
}

/// All five module outputs for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub pbd: RiskResult,
    pub tall_building: TallBuildingResult,
    pub walls: WallsResult,
    pub foundation: FoundationResult,
    pub ground_motion: GroundMotionResult,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn run_module1_pbd(input: &AnalysisInput) -> RiskResult {
    let mut risk_score = 0i32;

    // Base risk from zone
    match input.zone {
        SeismicZone::V => risk_score += 50,
        SeismicZone::Iv => risk_score += 30,
        SeismicZone::Iii => risk_score += 10,
        SeismicZone::Ii => {}
    }

    // Complexity from height
    if input.storeys > 30 {
        risk_score += 25;
    } else if input.storeys > 15 {
        risk_score += 15;
    }

    // System factors
    if input.structural_system == StructuralSystem::Smrf && input.storeys > 20 {
        risk_score += 10;
    }

    let risk_status = if risk_score > 60 {
        "High Risk"
    } else if risk_score > 30 {
        "Medium Risk"
    } else {
        "Low Risk"
    };

    RiskResult {
        risk_status: risk_status.to_string(),
        confidence_score: round1((100.0 - risk_score as f64 / 5.0).min(98.0)),
        recommendations: vec![
            if risk_score > 50 {
                "Perform non-linear time history analysis.".to_string()
            } else {
                "Linear static analysis sufficient.".to_string()
            },
            if input.storeys > 15 {
                "Check for P-Delta effects.".to_string()
            } else {
                "P-Delta effects negligible.".to_string()
            },
            "Verify joint shear in moment frames.".to_string(),
        ],
    }
}

pub fn run_module2_tall_building(input: &AnalysisInput) -> TallBuildingResult {
    let is_tall = input.storeys > 15;

    TallBuildingResult {
        status: if is_tall { "Active" } else { "Not Required" }.to_string(),
        // Rough proxy, not a real H/B ratio
        slenderness_ratio: round2(input.storeys as f64 * 0.15),
        sensitivity: if is_tall { "High" } else { "Low" }.to_string(),
        suggestions: if is_tall {
            vec![
                "Integrate core-outrigger system.".to_string(),
                "Check wind-induced vibrations.".to_string(),
            ]
        } else {
            vec!["No specialized tall building provisions required.".to_string()]
        },
    }
}

pub fn run_module3_walls(input: &AnalysisInput) -> WallsResult {
    let needs_walls = input.structural_system == StructuralSystem::Wall || input.storeys > 10;

    WallsResult {
        density_requirement: if needs_walls { "0.015 Ac" } else { "0.008 Ac" }.to_string(),
        placement_status: if input.regularity { "Symmetric" } else { "Eccentric" }.to_string(),
        suggestion: if needs_walls {
            "Ensure wall-centroid aligns with mass-centroid.".to_string()
        } else {
            "Frame action sufficient for lateral loads.".to_string()
        },
    }
}

pub fn run_module4_ssi(input: &AnalysisInput) -> FoundationResult {
    let soft = input.soil == SoilProfile::Soft;

    FoundationResult {
        foundation_type: if soft { "Piled Raft" } else { "Isolated/Raft" }.to_string(),
        ssi_effect: if soft { "Significant" } else { "Minor" }.to_string(),
        liquefaction_risk: if soft && input.groundwater == Groundwater::Shallow {
            "High"
        } else {
            "Low"
        }
        .to_string(),
        reason: if soft {
            "Soft strata increases spectral acceleration.".to_string()
        } else {
            "Firm strata offers stable subgrade.".to_string()
        },
    }
}

pub fn run_module5_ground_motion(input: &AnalysisInput) -> GroundMotionResult {
    GroundMotionResult {
        expected_pga: format!("{}g", input.zone.pga()),
        spectrum_type: "Type II (Medium)".to_string(),
        damping: "5%".to_string(),
        note: format!(
            "Analysis based on IS 1893:2016 for {}.",
            input.zone.key().to_uppercase()
        ),
    }
}

/// Run all five modules over one input record
pub fn run_analysis(input: &AnalysisInput) -> AnalysisResults {
    AnalysisResults {
        pbd: run_module1_pbd(input),
        tall_building: run_module2_tall_building(input),
        walls: run_module3_walls(input),
        foundation: run_module4_ssi(input),
        ground_motion: run_module5_ground_motion(input),
    }
}
