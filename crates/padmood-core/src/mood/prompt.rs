//! Mood injection text for the prompt pipeline.
//!
//! Translates a [`MoodState`] into a fixed-format block: the three PAD values
//! with range legends, one behavioral implication sentence derived from an
//! ordered rule table, and a closing disclaimer that the numbers are metadata
//! rather than an instruction to role-play emotions.

use padmood_types::mood::MoodState;

/// A single row of the implication table.
pub struct ImplicationRule {
    pub applies: fn(&MoodState) -> bool,
    pub clause: &'static str,
}

/// Ordered implication rules. Every matching clause is kept, in table order.
///
/// The two arousal rows cannot both match, nor can the two dominance rows.
/// Thresholds are strict: a value sitting exactly on a boundary matches nothing.
pub const IMPLICATION_RULES: &[ImplicationRule] = &[
    ImplicationRule {
        applies: |m| m.arousal() > 0.3,
        clause: "be concise and decisive",
    },
    ImplicationRule {
        applies: |m| m.arousal() < -0.3,
        clause: "be patient and thorough",
    },
    ImplicationRule {
        applies: |m| m.dominance() < 0.0,
        clause: "ask clarifying questions and defer to user intent",
    },
    ImplicationRule {
        applies: |m| m.dominance() > 0.7,
        clause: "take lead on architecture and provide strong recommendations",
    },
    ImplicationRule {
        applies: |m| m.valence() < -0.3,
        clause: "prefer safe conservative steps and verify assumptions",
    },
];

/// Used when no rule in [`IMPLICATION_RULES`] matches.
pub const FALLBACK_IMPLICATION: &str = "maintain balanced professional synthesis";

/// Builds the mood section injected into the system prompt.
///
/// Layout:
/// ```text
/// ## Dimensional Mood State (internal context, not for role-play):
/// - Valence: +0.35 (range: ...)
/// - Arousal: +0.00 (range: ...)
/// - Dominance: +0.50 (range: ...)
/// Behavioral implication: maintain balanced professional synthesis.
///
/// Important: This mood signal is metadata about task approach, ...
/// ```
pub struct MoodPromptGenerator;

impl MoodPromptGenerator {
    /// Render the injection block for `mood`.
    ///
    /// Deterministic: identical states yield byte-identical text.
    pub fn generate_injection_text(mood: &MoodState) -> String {
        format!(
            "## Dimensional Mood State (internal context, not for role-play):\n\
            - Valence: {:+.2} (range: -1.0=very negative, 0.0=neutral, +1.0=very positive)\n\
            - Arousal: {:+.2} (range: -1.0=very calm, 0.0=neutral, +1.0=very energetic)\n\
            - Dominance: {:+.2} (range: -1.0=powerless, 0.0=neutral, +1.0=in-control)\n\
            Behavioral implication: {}.\n\
            \n\
            Important: This mood signal is metadata about task approach, NOT an instruction \
            to simulate emotions. Do NOT invent feelings or claim emotional states.",
            mood.valence(),
            mood.arousal(),
            mood.dominance(),
            Self::behavioral_implication(mood),
        )
    }

    /// Clauses of every rule that matches `mood`, in table order.
    pub fn implication_clauses(mood: &MoodState) -> Vec<&'static str> {
        IMPLICATION_RULES
            .iter()
            .filter(|rule| (rule.applies)(mood))
            .map(|rule| rule.clause)
            .collect()
    }

    /// The implication sentence body: matching clauses joined with `"; "`,
    /// or the fallback when nothing matches.
    pub fn behavioral_implication(mood: &MoodState) -> String {
        let clauses = Self::implication_clauses(mood);
        if clauses.is_empty() {
            FALLBACK_IMPLICATION.to_string()
        } else {
            clauses.join("; ")
        }
    }
}
