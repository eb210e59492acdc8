//! Cluster naming and templated summaries.

use std::collections::HashSet;

use diarylens_core::{Mood, MoodCounts};
use diarylens_rules::Lexicon;

use crate::classify::PhraseMatcher;
use crate::text::keyphrases;

/// Name of the shared bucket for responses in no cluster.
pub const OUTLIER_NAME: &str = "Miscellaneous / Needs Review";
pub const OUTLIER_SUMMARY: &str =
    "This group contains responses that don't fit well into other clusters and may need manual review.";
/// Name used when a cluster has neither keywords nor keyphrases.
pub const FALLBACK_NAME: &str = "Miscellaneous";
pub const KEYPHRASES_PER_CLUSTER: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterLabel {
    pub name: String,
    pub summary: String,
    pub keyphrases: Vec<String>,
    pub dominant_emotion: Option<Mood>,
}

/// Derives names and summaries from cluster contents using the lexicon's
/// theme and emotion tables.
pub struct Labeler<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Labeler<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Label a regular cluster.
    ///
    /// `texts` are the members' raw answers, `member_terms` their term lists
    /// (for keyphrases) and `keywords` the cluster's top TF-IDF terms.
    pub fn label<S: AsRef<str>>(
        &self,
        texts: &[S],
        member_terms: &[Vec<String>],
        keywords: &[String],
    ) -> ClusterLabel {
        let phrases = keyphrases(member_terms, KEYPHRASES_PER_CLUSTER);
        let name = self.name(&phrases, keywords);
        let dominant_emotion = self.dominant_emotion(texts);
        let summary = summary(texts.len(), &name, dominant_emotion, keywords);
        ClusterLabel {
            name,
            summary,
            keyphrases: phrases,
            dominant_emotion,
        }
    }

    /// Label the outlier bucket: fixed name and summary, computed emotion.
    pub fn label_outliers<S: AsRef<str>>(
        &self,
        texts: &[S],
        member_terms: &[Vec<String>],
    ) -> ClusterLabel {
        ClusterLabel {
            name: OUTLIER_NAME.to_string(),
            summary: OUTLIER_SUMMARY.to_string(),
            keyphrases: keyphrases(member_terms, KEYPHRASES_PER_CLUSTER),
            dominant_emotion: self.dominant_emotion(texts),
        }
    }

    /// First theme whose pattern starts a word of a keyphrase or keyword,
    /// allowing plain inflections ("banking" reaches `bank`); otherwise the top two keywords joined with `&`.
    pub fn name(&self, keyphrases: &[String], keywords: &[String]) -> String {
        if keyphrases.is_empty() && keywords.is_empty() {
            return FALLBACK_NAME.to_string();
        }

        let phrases: Vec<PhraseMatcher> = keyphrases
            .iter()
            .chain(keywords)
            .map(|p| PhraseMatcher::new(p))
            .collect();
        for rule in &self.lexicon.themes {
            if phrases.iter().any(|p| p.contains_inflected(&rule.pattern)) {
                return rule.theme.clone();
            }
        }

        let source = if keywords.is_empty() { keyphrases } else { keywords };
        source
            .iter()
            .take(2)
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" & ")
    }

    /// Majority emotion across member texts by emotion-word containment;
    /// `None` when no emotion word appears.
    pub fn dominant_emotion<S: AsRef<str>>(&self, texts: &[S]) -> Option<Mood> {
        let mut counts = MoodCounts::default();
        for text in texts {
            let lower = text.as_ref().to_lowercase();
            for mood in Mood::ALL {
                for word in self.lexicon.emotion_words(mood) {
                    if lower.contains(word.as_str()) {
                        counts.record(mood);
                    }
                }
            }
        }
        counts.dominant()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn tone(mood: Mood) -> &'static str {
    match mood {
        Mood::Positive => "positive feelings like satisfaction or pride",
        Mood::Negative => "negative feelings like frustration or disappointment",
        Mood::Anxious => "anxiety or stress",
        Mood::Neutral => "neutral or matter-of-fact attitudes",
    }
}

/// Templated one- or two-sentence cluster summary.
pub fn summary(size: usize, name: &str, emotion: Option<Mood>, keywords: &[String]) -> String {
    let mut text = format!(
        "This group contains {size} responses related to {}.",
        name.to_lowercase()
    );
    if let Some(mood) = emotion {
        let subject = if keywords.is_empty() {
            "this financial behavior".to_string()
        } else {
            keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        };
        text.push_str(&format!(
            " These entries generally express {} about {subject}.",
            tone(mood)
        ));
    }
    text
}

/// Suffix repeated names with " 2", " 3", … so every name is unique.
pub fn make_names_unique(names: &mut [String]) {
    let mut used: HashSet<String> = HashSet::new();
    for name in names.iter_mut() {
        if used.insert(name.clone()) {
            continue;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{name} {n}");
            if used.insert(candidate.clone()) {
                *name = candidate;
                break;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn theme_table_names_cluster() {
        let lex = Lexicon::builtin();
        let labeler = Labeler::new(&lex);
        let name = labeler.name(&strings(&["electricity bill"]), &strings(&["electricity"]));
        assert_eq!(name, "Bill Payments");
    }

    #[test]
    fn inflected_keywords_reach_their_theme() {
        let lex = Lexicon::builtin();
        let labeler = Labeler::new(&lex);
        for (word, theme) in [
            ("stressed", "Financial Stress"),
            ("banking", "Banking Activity"),
            ("loans", "Loan Management"),
            ("planning", "Financial Planning"),
            ("investment", "Investment Activity"),
        ] {
            let name = labeler.name(&strings(&[word]), &strings(&[word, "rent"]));
            assert_eq!(name, theme, "{word}");
        }
    }

    #[test]
    fn theme_patterns_need_whole_words() {
        let lex = Lexicon::builtin();
        let labeler = Labeler::new(&lex);
        // Neither "app" nor "happy" may fire inside longer words.
        let name = labeler.name(&[], &strings(&["apple", "happiness"]));
        assert_eq!(name, "Apple & Happiness");
    }

    #[test]
    fn falls_back_to_top_keywords() {
        let lex = Lexicon::builtin();
        let labeler = Labeler::new(&lex);
        let name = labeler.name(&strings(&["hiking trail"]), &strings(&["hiking", "trail", "mountain"]));
        assert_eq!(name, "Hiking & Trail");
        assert_eq!(labeler.name(&[], &[]), FALLBACK_NAME);
    }

    #[test]
    fn summary_mentions_emotion_and_keywords() {
        let lex = Lexicon::builtin();
        let labeler = Labeler::new(&lex);
        let texts = ["So happy the bill is done", "Proud of paying early", "It was fine"];
        let terms = vec![strings(&["happy", "bill"]), strings(&["proud"]), vec![]];
        let label = labeler.label(&texts, &terms, &strings(&["bill", "early", "proud", "done"]));
        assert_eq!(label.dominant_emotion, Some(Mood::Positive));
        assert_eq!(
            label.summary,
            "This group contains 3 responses related to financial satisfaction. \
             These entries generally express positive feelings like satisfaction or pride \
             about bill, early, proud."
        );
    }

    #[test]
    fn summary_without_emotion_is_one_sentence() {
        assert_eq!(
            summary(2, "Hiking & Trail", None, &[]),
            "This group contains 2 responses related to hiking & trail."
        );
        assert!(summary(2, "X", Some(Mood::Anxious), &[]).ends_with("anxiety or stress about this financial behavior."));
    }

    #[test]
    fn outlier_label_is_fixed() {
        let lex = Lexicon::builtin();
        let label = Labeler::new(&lex).label_outliers(&["went hiking"], &[strings(&["hiking"])]);
        assert_eq!(label.name, OUTLIER_NAME);
        assert_eq!(label.summary, OUTLIER_SUMMARY);
        assert_eq!(label.dominant_emotion, None);
    }

    #[test]
    fn duplicate_names_get_suffixes() {
        let mut names = strings(&["Bill Payments", "Dining Out", "Bill Payments", "Bill Payments"]);
        make_names_unique(&mut names);
        assert_eq!(names, vec!["Bill Payments", "Dining Out", "Bill Payments 2", "Bill Payments 3"]);
    }
}
