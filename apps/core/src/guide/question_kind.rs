//! Question command-word categories and their study tips.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an exam question, decided by its command word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// define / what is
    Definition,
    /// explain / describe
    Explanation,
    /// calculate / solve
    Calculation,
    /// compare / difference
    Comparison,
    /// list / give / state
    Enumeration,
    /// Anything else
    General,
}

/// Checked in order; the first category with a matching cue wins.
const CUES: &[(QuestionKind, &[&str])] = &[
    (QuestionKind::Definition, &["define", "what is"]),
    (QuestionKind::Explanation, &["explain", "describe"]),
    (QuestionKind::Calculation, &["calculate", "solve"]),
    (QuestionKind::Comparison, &["compare", "difference"]),
    (QuestionKind::Enumeration, &["list", "give", "state"]),
];

impl QuestionKind {
    /// Classify a question by substring cues in its lowercase form.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        CUES.iter()
            .find(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
            .map(|(kind, _)| *kind)
            .unwrap_or(QuestionKind::General)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Definition => "definition",
            QuestionKind::Explanation => "explanation",
            QuestionKind::Calculation => "calculation",
            QuestionKind::Comparison => "comparison",
            QuestionKind::Enumeration => "enumeration",
            QuestionKind::General => "general",
        }
    }

    /// Canned advice for answering this kind of question.
    pub fn study_tip(&self) -> &'static str {
        match self {
            QuestionKind::Definition => {
                "This is a definition question. Learn the exact definition from your textbook."
            }
            QuestionKind::Explanation => {
                "This requires detailed explanation. Practice writing 2-3 paragraph answers."
            }
            QuestionKind::Calculation => {
                "This is a calculation question. Show all your working steps."
            }
            QuestionKind::Comparison => {
                "Make a comparison table showing similarities and differences."
            }
            QuestionKind::Enumeration => {
                "List format is fine. Make sure you give the correct number of points."
            }
            QuestionKind::General => {
                "Review your notes and textbook for this topic. Practice similar questions."
            }
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
