//! Analysis state: the input form and the last rule engine run.

use shared::rules::AnalysisResults;
use shared::{run_analysis, AnalysisInput};

#[derive(Default)]
pub struct AnalysisState {
    pub input: AnalysisInput,
    results: Option<AnalysisResults>,
    runs: u64,
}

impl AnalysisState {
    pub fn results(&self) -> Option<&AnalysisResults> {
        self.results.as_ref()
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Execute all rule modules against the current input
    pub fn run(&mut self) {
        let results = run_analysis(&self.input);
        tracing::info!(
            zone = self.input.zone.key(),
            storeys = self.input.storeys,
            risk = %results.pbd.risk_status,
            "analysis complete"
        );
        self.results = Some(results);
        self.runs += 1;
    }

    pub fn clear(&mut self) {
        self.results = None;
    }

    /// Foundation verdict string for the overlay generator; empty before
    /// the first run
    pub fn foundation_type(&self) -> &str {
        self.results
            .as_ref()
            .map_or("", |r| r.foundation.foundation_type.as_str())
    }

    /// Risk verdict string for the overlay generator
    pub fn risk_status(&self) -> &str {
        self.results
            .as_ref()
            .map_or("", |r| r.pbd.risk_status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SeismicZone;

    #[test]
    fn test_run_stores_results() {
        let mut state = AnalysisState::default();
        assert!(state.results().is_none());
        assert_eq!(state.foundation_type(), "");

        state.run();
        assert_eq!(state.runs(), 1);
        assert_eq!(state.foundation_type(), "Isolated/Raft");
        assert_eq!(state.risk_status(), "Low Risk");

        state.clear();
        assert!(state.results().is_none());
    }

    #[test]
    fn test_rerun_reflects_new_input() {
        let mut state = AnalysisState::default();
        state.run();
        state.input.zone = SeismicZone::V;
        state.input.storeys = 25;
        state.run();
        assert_eq!(state.runs(), 2);
        assert_eq!(state.risk_status(), "High Risk");
    }
}
