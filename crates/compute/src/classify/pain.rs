use diarylens_rules::Lexicon;

/// Matched pain-point indicators, in table order.
pub fn detect_pain_points(normalized: &str, lexicon: &Lexicon) -> Vec<String> {
    lexicon
        .pain_indicators
        .iter()
        .filter(|indicator| normalized.contains(indicator.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;

    fn pain(text: &str) -> Vec<String> {
        let lex = Lexicon::builtin();
        detect_pain_points(&normalize(text, &lex), &lex)
    }

    #[test]
    fn substring_indicators_match_word_stems() {
        assert_eq!(pain("So frustrating and confusing"), vec!["frustrat", "confus"]);
    }

    #[test]
    fn contractions_expand_before_matching() {
        assert_eq!(pain("I couldn't log in"), vec!["could not"]);
    }

    #[test]
    fn calm_text_has_no_pain() {
        assert!(pain("Paid the rent on time").is_empty());
        assert!(pain("").is_empty());
    }
}
