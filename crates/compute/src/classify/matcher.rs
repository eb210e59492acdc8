/// Normalized text padded with spaces so phrases can be matched on word
/// boundaries with plain substring search.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    padded: String,
}

impl PhraseMatcher {
    pub fn new(normalized: &str) -> Self {
        Self {
            padded: format!(" {} ", normalized.trim()),
        }
    }

    /// Whether `phrase` occurs as a whole-word sequence.
    pub fn contains(&self, phrase: &str) -> bool {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return false;
        }
        self.padded.contains(&format!(" {phrase} "))
    }

    /// Number of `phrases` that occur at least once.
    pub fn count_hits<S: AsRef<str>>(&self, phrases: &[S]) -> usize {
        phrases.iter().filter(|p| self.contains(p.as_ref())).count()
    }

    /// Whole-word occurrences of all `phrases`, repeats included.
    pub fn count_occurrences<S: AsRef<str>>(&self, phrases: &[S]) -> usize {
        phrases.iter().map(|p| self.occurrences(p.as_ref())).sum()
    }

    fn occurrences(&self, phrase: &str) -> usize {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return 0;
        }
        // Match without the trailing space so adjacent repeats share it.
        let needle = format!(" {phrase}");
        self.padded
            .match_indices(&needle)
            .filter(|(at, _)| self.padded[at + needle.len()..].starts_with(' '))
            .count()
    }

    /// Whether `stem` starts a word whose remainder is a plain inflection
    /// ("bank" in "banking", "plan" in "planning"), or is the whole word.
    pub fn contains_inflected(&self, stem: &str) -> bool {
        let stem = stem.trim();
        if stem.is_empty() {
            return false;
        }
        let needle = format!(" {stem}");
        self.padded.match_indices(&needle).any(|(at, _)| {
            let rest = &self.padded[at + needle.len()..];
            let tail = rest.split(' ').next().unwrap_or_default();
            is_inflection(stem, tail)
        })
    }
}

const INFLECTIONS: &[&str] = &["s", "es", "d", "ed", "ing", "er", "ers", "ment", "ments"];

fn is_inflection(stem: &str, tail: &str) -> bool {
    if tail.is_empty() || INFLECTIONS.contains(&tail) {
        return true;
    }
    // Doubled final consonant: shop → shopping, transfer → transferred.
    let mut chars = tail.chars();
    match (stem.chars().last(), chars.next()) {
        (Some(last), Some(first)) if last == first => {
            matches!(chars.as_str(), "ed" | "ing" | "er" | "ers")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        let m = PhraseMatcher::new("i used the app to check my balance");
        assert!(m.contains("app"));
        assert!(m.contains("check my balance"));
        assert!(!m.contains("happ"));
        assert!(!m.contains("ap"));
    }

    #[test]
    fn matches_at_text_edges() {
        let m = PhraseMatcher::new("groceries again");
        assert!(m.contains("groceries"));
        assert!(m.contains("again"));
    }

    #[test]
    fn counts_each_phrase_once() {
        let m = PhraseMatcher::new("bill bill bank");
        assert_eq!(m.count_hits(&["bill", "bank", "loan"]), 2);
        assert_eq!(m.count_hits(&[""]), 0);
    }

    #[test]
    fn counts_every_occurrence() {
        let m = PhraseMatcher::new("sad so sad really sad sadly");
        assert_eq!(m.count_occurrences(&["sad"]), 3);
        assert_eq!(m.count_occurrences(&["sad", "good", ""]), 3);
        assert_eq!(PhraseMatcher::new("sad sad").count_occurrences(&["sad"]), 2);
    }

    #[test]
    fn inflected_words_match_their_stem() {
        for (text, stem) in [
            ("stressed", "stress"),
            ("banking", "bank"),
            ("loans", "loan"),
            ("investment", "invest"),
            ("planning", "plan"),
            ("transferred money", "transfer"),
            ("pay bills", "pay bill"),
            ("budget", "budget"),
        ] {
            assert!(PhraseMatcher::new(text).contains_inflected(stem), "{text} / {stem}");
        }
    }

    #[test]
    fn inflection_needs_word_start_and_known_suffix() {
        assert!(!PhraseMatcher::new("happy").contains_inflected("app"));
        assert!(!PhraseMatcher::new("apple").contains_inflected("app"));
        assert!(!PhraseMatcher::new("planet").contains_inflected("plan"));
        assert!(!PhraseMatcher::new("anything").contains_inflected(""));
    }
}
