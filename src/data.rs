use leptos::prelude::*;

use crate::analysis::{AnalysisResult, Mode};
use crate::components::badge::BadgeColor;
use crate::components::icons::{BookOpen, FlaskConical, Users};

// ── Preset catalog ────────────────────────────────────────────────────────────

/// A worked example the demo can load without calling the backend: the input
/// pair for a given mode plus the canned analysis the product ships for it.
pub struct Preset {
    pub problem: &'static str,
    pub reasoning: &'static str,
    pub mode: Mode,
    pub result: AnalysisResult,
}

/// Returns the worked example for `mode`. Total over the mode set; there is
/// no lookup to miss.
pub fn preset(mode: Mode) -> Preset {
    match mode {
        Mode::Education => Preset {
            problem: "A train travels 120 km in 2 hours. If it speeds up by 50%, how long does \
                      the new journey take?",
            reasoning: "Original speed is 60 km/h. 50% faster means 90 km/h. So time = 120/90 = \
                        1.5 hours. Wait, but I think speeding up by 50% means adding 50 km/h, so \
                        110 km/h...",
            mode,
            result: AnalysisResult {
                mistake_type: "Percentage misinterpretation".to_string(),
                reasoning_pattern: "The reasoning correctly identifies the base speed but then \
                                    second-guesses the meaning of 'speeds up by 50%', conflating \
                                    percentage increase with absolute addition."
                    .to_string(),
                explanation: "The initial approach was sound. The error occurs when \
                              re-interpreting '50% faster' as an absolute value (+50 km/h) \
                              rather than a relative percentage of the original speed. This is a \
                              common cognitive pattern where uncertainty leads to overcorrection."
                    .to_string(),
                additional_fields: None,
            },
        },
        Mode::Interview => Preset {
            problem: "Design a system that can handle 10,000 concurrent WebSocket connections \
                      with real-time updates.",
            reasoning: "I would use a single Node.js server since it handles async well. Each \
                        connection would store state in memory. For scaling, I'd just add more \
                        RAM.",
            mode,
            result: AnalysisResult {
                mistake_type: "Scalability blind spot".to_string(),
                reasoning_pattern: "The candidate correctly identifies Node.js event-loop \
                                    strengths but assumes vertical scaling (more RAM) solves \
                                    horizontal scaling problems."
                    .to_string(),
                explanation: "Single-server architecture creates a single point of failure. \
                              In-memory state is lost on restart and cannot be shared across \
                              instances. The reasoning lacks consideration of load balancing, \
                              state externalization, and graceful degradation under peak load."
                    .to_string(),
                additional_fields: None,
            },
        },
        Mode::Research => Preset {
            problem: "Study claims: 'Students who use AI tools score 15% higher on exams.'",
            reasoning: "AI tools improve learning outcomes. The 15% improvement is significant. \
                        Schools should adopt AI tools immediately based on this evidence.",
            mode,
            result: AnalysisResult {
                mistake_type: "Correlation-causation conflation".to_string(),
                reasoning_pattern: "Jumps from observational correlation to causal claim, then \
                                    to prescriptive action, without examining confounding \
                                    variables or study methodology."
                    .to_string(),
                explanation: "The reasoning exhibits confirmation bias by accepting the headline \
                              claim without questioning selection bias (do higher-performing \
                              students gravitate toward AI tools?), study design (was it \
                              randomized?), or alternative explanations. The leap to policy \
                              recommendation compounds the initial analytical gap."
                    .to_string(),
                additional_fields: None,
            },
        },
    }
}

// ── Static section content ────────────────────────────────────────────────────

pub struct ModeCard {
    pub icon: fn() -> AnyView,
    pub mode: Mode,
    pub focus: &'static str,
    pub focus_color: BadgeColor,
    pub desc: &'static str,
}

pub fn mode_cards() -> Vec<ModeCard> {
    vec![
        ModeCard {
            icon: || view! { <BookOpen class="w-5 h-5 text-blue-400" /> }.into_any(),
            mode: Mode::Education,
            focus: "Learning & reflection",
            focus_color: BadgeColor::Blue,
            desc: "Explains reasoning mistakes to help students understand where their thinking diverged, without revealing correct solutions.",
        },
        ModeCard {
            icon: || view! { <Users class="w-5 h-5 text-green-400" /> }.into_any(),
            mode: Mode::Interview,
            focus: "Evaluation",
            focus_color: BadgeColor::Green,
            desc: "Highlights reasoning risks and structural weaknesses in problem-solving approaches, useful for assessment contexts.",
        },
        ModeCard {
            icon: || view! { <FlaskConical class="w-5 h-5 text-purple-400" /> }.into_any(),
            mode: Mode::Research,
            focus: "Cognitive analysis",
            focus_color: BadgeColor::Purple,
            desc: "Identifies bias patterns, logical fallacies, and systematic reasoning errors for academic and analytical purposes.",
        },
    ]
}

pub fn differentiators() -> Vec<&'static str> {
    vec![
        "Does not give answers",
        "Safe for numeric problems",
        "Focuses on reasoning, not results",
        "Designed for real interviews and research",
    ]
}

pub fn pipeline_steps() -> Vec<&'static str> {
    vec!["Problem", "Reasoning", "Analysis", "Insight"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_catalog_is_total_and_self_consistent() {
        for mode in Mode::ALL {
            let preset = preset(mode);
            assert_eq!(preset.mode, mode);
            assert!(!preset.problem.trim().is_empty());
            assert!(!preset.reasoning.trim().is_empty());
            assert!(!preset.result.mistake_type.is_empty());
            assert!(!preset.result.reasoning_pattern.is_empty());
            assert!(!preset.result.explanation.is_empty());
            assert!(preset.result.additional_fields.is_none());
        }
    }

    #[test]
    fn test_presets_are_distinct_worked_examples() {
        assert!(preset(Mode::Education).problem.starts_with("A train travels"));
        assert!(preset(Mode::Interview).problem.contains("WebSocket"));
        assert!(preset(Mode::Research).problem.contains("Study claims"));
    }

    #[test]
    fn test_mode_cards_cover_every_mode_in_order() {
        let cards = mode_cards();
        let modes: Vec<Mode> = cards.iter().map(|card| card.mode).collect();
        assert_eq!(modes, Mode::ALL);
    }
}
