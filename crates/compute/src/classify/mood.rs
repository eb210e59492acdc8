use diarylens_core::Mood;
use diarylens_rules::Lexicon;

use crate::classify::matcher::PhraseMatcher;

/// Raw per-mood scores before a winner is picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodScores {
    pub positive: usize,
    pub negative: usize,
    pub anxious: usize,
}

impl MoodScores {
    /// Highest score wins; ties go to positive, then negative, then anxious.
    /// All zero means neutral.
    pub fn winner(&self) -> Mood {
        let mut best = (Mood::Neutral, 0);
        for (mood, score) in [
            (Mood::Positive, self.positive),
            (Mood::Negative, self.negative),
            (Mood::Anxious, self.anxious),
        ] {
            if score > best.1 {
                best = (mood, score);
            }
        }
        best.0
    }
}

/// Score `raw` text (and its normalized form) against the mood tables.
///
/// Every whole-word occurrence of an indicator scores one point.
/// Negation takes one point from positive and adds one to negative.
/// Exclamation marks add to whichever of positive/negative leads, and two or
/// more question marks add one to anxious.
pub fn score_mood(raw: &str, normalized: &str, lexicon: &Lexicon) -> MoodScores {
    let matcher = PhraseMatcher::new(normalized);
    let mut scores = MoodScores {
        positive: matcher.count_occurrences(lexicon.mood_indicators(Mood::Positive)),
        negative: matcher.count_occurrences(lexicon.mood_indicators(Mood::Negative)),
        anxious: matcher.count_occurrences(lexicon.mood_indicators(Mood::Anxious)),
    };

    if normalized.split_whitespace().any(|t| lexicon.is_negator(t)) {
        scores.positive = scores.positive.saturating_sub(1);
        scores.negative += 1;
    }

    let exclamations = raw.matches('!').count();
    if scores.positive > scores.negative {
        scores.positive += exclamations;
    } else if scores.negative > scores.positive {
        scores.negative += exclamations;
    }

    if raw.matches('?').count() >= 2 {
        scores.anxious += 1;
    }

    scores
}

pub fn classify_mood(raw: &str, normalized: &str, lexicon: &Lexicon) -> Mood {
    score_mood(raw, normalized, lexicon).winner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn mood(text: &str) -> Mood {
        let lex = Lexicon::builtin();
        classify_mood(text, &normalize(text, &lex), &lex)
    }

    #[test]
    fn plain_examples() {
        assert_eq!(mood("I am so happy and excited today"), Mood::Positive);
        assert_eq!(mood("I am anxious and worried about my bills"), Mood::Anxious);
        assert_eq!(mood("I went to the store"), Mood::Neutral);
        assert_eq!(mood(""), Mood::Neutral);
    }

    #[test]
    fn negation_flips_toward_negative() {
        assert_eq!(mood("I am not happy with the fees"), Mood::Negative);
        assert_eq!(mood("I wasn't happy"), Mood::Negative);
    }

    #[test]
    fn exclamations_amplify_the_leader() {
        let lex = Lexicon::builtin();
        let text = "Great deal, really happy, bit annoyed at the queue!!!";
        let scores = score_mood(text, &normalize(text, &lex), &lex);
        assert_eq!(scores.positive, 5);
        assert_eq!(scores.negative, 1);
    }

    #[test]
    fn exclamations_ignored_on_a_tie() {
        let lex = Lexicon::builtin();
        let text = "Happy but annoyed!!";
        let scores = score_mood(text, &normalize(text, &lex), &lex);
        assert_eq!((scores.positive, scores.negative), (1, 1));
        assert_eq!(scores.winner(), Mood::Positive);
    }

    #[test]
    fn repeated_questions_signal_anxiety() {
        assert_eq!(mood("Will the payment go through?? What if it bounces?"), Mood::Anxious);
        assert_eq!(mood("Did the payment go through?"), Mood::Neutral);
    }

    #[test]
    fn repeated_indicators_each_count() {
        let lex = Lexicon::builtin();
        let text = "I was sad, so sad, really sad all week, though lunch was good";
        let scores = score_mood(text, &normalize(text, &lex), &lex);
        assert_eq!((scores.positive, scores.negative), (1, 3));
        assert_eq!(scores.winner(), Mood::Negative);
    }

    #[test]
    fn indicators_match_whole_words() {
        // "sadly" and "badge" must not count as "sad" or "bad".
        assert_eq!(mood("Sadly I lost my badge"), Mood::Neutral);
    }
}
