//! Rule-based classifiers driven by the lexicon tables.

pub mod matcher;
pub mod mood;
pub mod pain;
pub mod task;

use std::collections::BTreeSet;

use diarylens_core::{Mood, TaskCategory};
use diarylens_rules::Lexicon;

pub use matcher::PhraseMatcher;
pub use mood::{classify_mood, score_mood, MoodScores};
pub use pain::detect_pain_points;
pub use task::classify_tasks;

use crate::text::normalize;

/// Everything the classifiers derive from one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub normalized: String,
    pub mood: Mood,
    pub tasks: BTreeSet<TaskCategory>,
    pub pain_indicators: Vec<String>,
}

impl Classification {
    pub fn is_pain_point(&self) -> bool {
        !self.pain_indicators.is_empty()
    }
}

/// Normalize `text` once and run every classifier over it.
pub fn classify(text: &str, lexicon: &Lexicon) -> Classification {
    let normalized = normalize(text, lexicon);
    Classification {
        mood: classify_mood(text, &normalized, lexicon),
        tasks: classify_tasks(&normalized, lexicon),
        pain_indicators: detect_pain_points(&normalized, lexicon),
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_combines_all_classifiers() {
        let lex = Lexicon::builtin();
        let c = classify("Couldn't pay my bill online, so frustrated!", &lex);
        assert_eq!(c.normalized, "could not pay my bill online so frustrated");
        assert_eq!(c.mood, Mood::Negative);
        assert!(c.tasks.contains(&TaskCategory::FinancialManagement));
        assert!(c.is_pain_point());
    }

    #[test]
    fn empty_text_gets_neutral_defaults() {
        let c = classify("", &Lexicon::builtin());
        assert_eq!(c.normalized, "");
        assert_eq!(c.mood, Mood::Neutral);
        assert_eq!(c.tasks.len(), 1);
        assert!(c.tasks.contains(&TaskCategory::Other));
        assert!(!c.is_pain_point());
    }
}
