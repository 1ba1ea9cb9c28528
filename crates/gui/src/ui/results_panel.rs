//! Rule engine results: one collapsible section per module.

use egui::{RichText, Ui};

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Results");
    ui.add_space(4.0);

    let Some(results) = state.analysis.results() else {
        ui.label(
            RichText::new("No analysis yet. Set the inputs and press Run Analysis.").weak(),
        );
        return;
    };

    // ── Performance-based design ─────────────────────────────
    section(ui, "Performance-Based Design", true, |ui| {
        let r = &results.pbd;
        let color = if r.risk_status == "High Risk" {
            egui::Color32::from_rgb(230, 80, 80)
        } else if r.risk_status == "Medium Risk" {
            egui::Color32::from_rgb(230, 160, 60)
        } else {
            egui::Color32::from_rgb(100, 200, 110)
        };
        row(ui, "Risk status", RichText::new(&r.risk_status).color(color).strong());
        row(ui, "Confidence", RichText::new(confidence_text(r.confidence_score)));
        bullet_list(ui, "Recommendations", &r.recommendations);
    });

    // ── Tall building check ──────────────────────────────────
    section(ui, "Tall Building Check", false, |ui| {
        let r = &results.tall_building;
        row(ui, "Status", RichText::new(&r.status));
        row(
            ui,
            "Slenderness",
            RichText::new(format!("{:.2}", r.slenderness_ratio)),
        );
        row(ui, "Sensitivity", RichText::new(&r.sensitivity));
        bullet_list(ui, "Suggestions", &r.suggestions);
    });

    // ── Shear wall layout ────────────────────────────────────
    section(ui, "Shear Wall Layout", false, |ui| {
        let r = &results.walls;
        row(ui, "Density", RichText::new(&r.density_requirement));
        row(ui, "Placement", RichText::new(&r.placement_status));
        ui.label(RichText::new(&r.suggestion).small());
    });

    // ── Soil-structure interaction ───────────────────────────
    section(ui, "Foundation & SSI", false, |ui| {
        let r = &results.foundation;
        row(ui, "Foundation", RichText::new(&r.foundation_type).strong());
        row(ui, "SSI effect", RichText::new(&r.ssi_effect));
        row(ui, "Liquefaction", RichText::new(&r.liquefaction_risk));
        ui.label(RichText::new(&r.reason).small().weak());
    });

    // ── Ground motion ────────────────────────────────────────
    section(ui, "Ground Motion", false, |ui| {
        let r = &results.ground_motion;
        row(ui, "Expected PGA", RichText::new(&r.expected_pga));
        row(ui, "Spectrum", RichText::new(&r.spectrum_type));
        row(ui, "Damping", RichText::new(&r.damping));
        ui.label(RichText::new(&r.note).small().weak());
    });
}

/// The rule engine reports confidence already in percent (0..=98)
fn confidence_text(score: f64) -> String {
    format!("{:.1}%", score)
}

fn section(ui: &mut Ui, title: &str, open: bool, add_contents: impl FnOnce(&mut Ui)) {
    egui::CollapsingHeader::new(RichText::new(title).strong())
        .default_open(open)
        .show(ui, add_contents);
    ui.add_space(2.0);
}

fn row(ui: &mut Ui, label: &str, value: RichText) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn bullet_list(ui: &mut Ui, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ui.label(RichText::new(label).weak());
    for item in items {
        ui.label(RichText::new(format!("• {item}")).small());
    }
}
