//! Demo panel state machine.
//!
//! Pure state, no rendering and no I/O: the interactive demo component holds
//! one [`DemoState`] in a signal and drives it through these transitions.
//!
//! - edits to problem/reasoning/mode are plain field writes
//! - [`DemoState::load_preset`] fills the inputs from the catalog and clears
//!   any prior result, without contacting the backend
//! - [`DemoState::begin_analysis`] guards the submit and produces the request
//! - [`DemoState::settle`] applies the outcome; success and failure settle
//!   identically in shape
//!
//! At most one request is in flight per panel: the submit trigger is inert
//! while `is_analyzing` is set. Overlapping settlements from programmatic
//! double submission would be last-write-wins; the UI never issues them.

use crate::analysis::{AnalysisRequest, AnalysisResult, Mode};
use crate::data;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub problem: String,
    pub reasoning: String,
    pub mode: Mode,
    pub result: Option<AnalysisResult>,
    pub is_analyzing: bool,
    /// Bumped once per settlement. The result card keys its entry animation
    /// on this so the animation replays even when two settlements produce an
    /// identical result.
    pub result_revision: u64,
}

impl Default for DemoState {
    fn default() -> Self {
        DemoState {
            problem: String::new(),
            reasoning: String::new(),
            mode: Mode::Education,
            result: None,
            is_analyzing: false,
            result_revision: 0,
        }
    }
}

impl DemoState {
    /// Overwrites the inputs with the worked example for `mode` and clears
    /// the result pane. Does not touch `is_analyzing` or the revision.
    pub fn load_preset(&mut self, mode: Mode) {
        let preset = data::preset(mode);
        self.problem = preset.problem.to_string();
        self.reasoning = preset.reasoning.to_string();
        self.mode = preset.mode;
        self.result = None;
    }

    /// Whether the submit trigger is live: idle, and both inputs have
    /// non-whitespace content.
    pub fn can_submit(&self) -> bool {
        !self.is_analyzing
            && !self.problem.trim().is_empty()
            && !self.reasoning.trim().is_empty()
    }

    /// Enters the in-flight state and returns the request to send, or `None`
    /// (state untouched) when the guard refuses.
    ///
    /// The request carries the fields exactly as typed; trimming applies only
    /// to the blank check.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if !self.can_submit() {
            return None;
        }

        self.is_analyzing = true;
        self.result = None;
        Some(AnalysisRequest {
            problem: self.problem.clone(),
            reasoning: self.reasoning.clone(),
            mode: self.mode,
        })
    }

    /// Applies a settlement, successful or not.
    pub fn settle(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.result_revision += 1;
        self.is_analyzing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            mistake_type: "Percentage misinterpretation".to_string(),
            reasoning_pattern: "Second-guessing".to_string(),
            explanation: "Overcorrection under uncertainty.".to_string(),
            additional_fields: None,
        }
    }

    fn filled() -> DemoState {
        DemoState {
            problem: "Why is the sky blue?".to_string(),
            reasoning: "Because of Rayleigh scattering, I think.".to_string(),
            ..DemoState::default()
        }
    }

    #[test]
    fn test_load_preset_copies_catalog_values() {
        for mode in Mode::ALL {
            let mut state = DemoState::default();
            state.load_preset(mode);

            let preset = data::preset(mode);
            assert_eq!(state.problem, preset.problem);
            assert_eq!(state.reasoning, preset.reasoning);
            assert_eq!(state.mode, preset.mode);
            assert!(state.result.is_none());
            assert!(!state.is_analyzing);
            assert_eq!(state.result_revision, 0);
        }
    }

    #[test]
    fn test_load_preset_clears_prior_result_without_bumping_revision() {
        let mut state = filled();
        state.begin_analysis().unwrap();
        state.settle(sample_result());
        assert_eq!(state.result_revision, 1);

        state.load_preset(Mode::Research);
        assert!(state.result.is_none());
        assert_eq!(state.result_revision, 1);
    }

    #[test]
    fn test_begin_analysis_rejects_blank_problem() {
        let mut state = filled();
        state.problem = "   \n\t ".to_string();
        let before = state.clone();

        assert!(state.begin_analysis().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_begin_analysis_rejects_blank_reasoning() {
        let mut state = filled();
        state.reasoning = String::new();
        let before = state.clone();

        assert!(state.begin_analysis().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_begin_analysis_is_inert_while_in_flight() {
        let mut state = filled();
        assert!(state.begin_analysis().is_some());
        assert!(state.is_analyzing);

        assert!(state.begin_analysis().is_none());
    }

    #[test]
    fn test_begin_analysis_builds_request_from_fields_as_typed() {
        let mut state = filled();
        state.problem = "  padded problem  ".to_string();
        state.mode = Mode::Interview;
        state.settle(sample_result());

        let request = state.begin_analysis().unwrap();
        assert_eq!(request.problem, "  padded problem  ");
        assert_eq!(request.reasoning, state.reasoning);
        assert_eq!(request.mode, Mode::Interview);

        // Entering the in-flight state clears the previous result.
        assert!(state.is_analyzing);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_settle_applies_result_and_bumps_revision_once() {
        let mut state = filled();
        state.begin_analysis().unwrap();
        state.settle(sample_result());

        assert_eq!(state.result, Some(sample_result()));
        assert!(!state.is_analyzing);
        assert_eq!(state.result_revision, 1);

        state.begin_analysis().unwrap();
        state.settle(AnalysisResult::connection_failed());
        assert_eq!(state.result_revision, 2);
        assert!(!state.is_analyzing);
    }

    #[test]
    fn test_failure_settles_with_sentinel_result() {
        let mut state = filled();
        state.begin_analysis().unwrap();
        state.settle(AnalysisResult::connection_failed());

        let result = state.result.unwrap();
        assert_eq!(result.mistake_type, "System Error");
        assert_eq!(result.reasoning_pattern, "Connection Failed");
    }

    #[test]
    fn test_edits_after_settlement_keep_result_visible() {
        let mut state = filled();
        state.begin_analysis().unwrap();
        state.settle(sample_result());

        state.problem.push_str(" and why is it sometimes red?");
        assert!(state.result.is_some());
        assert!(state.can_submit());
    }
}
