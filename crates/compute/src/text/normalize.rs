//! Text normalization and the token views built on top of it.
//!
//! Normalized text is lowercase, has contractions expanded at token ends,
//! keeps only alphanumerics and inner apostrophes, and is single-spaced.
//! Running [`normalize`] on its own output returns the same string.
//!
//! Lemmatization is a suffix-stripping heuristic (`ing`, `ed`, `s`). It is
//! cheap and predictable but not linguistically exact: "was" stays "was",
//! "running" becomes "runn".

use diarylens_rules::Lexicon;

/// Normalize raw text. Empty input yields an empty string.
pub fn normalize(text: &str, lexicon: &Lexicon) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\'' => '\'',
            c if c.is_alphanumeric() => c,
            _ => ' ',
        })
        .collect();

    let mut out: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        expand_token(token, lexicon, &mut out);
    }
    out.join(" ")
}

/// Expand contractions at the end of one token, pushing the resulting words.
fn expand_token(token: &str, lexicon: &Lexicon, out: &mut Vec<String>) {
    let mut stem = token.trim_matches('\'').to_string();
    let mut expansions: Vec<&str> = Vec::new();

    while !stem.is_empty() {
        if let Some((_, expansion)) = lexicon
            .word_contractions
            .iter()
            .find(|(word, _)| *word == stem)
        {
            expansions.push(expansion);
            stem.clear();
            break;
        }

        let suffix = lexicon
            .suffix_contractions
            .iter()
            .find(|(suffix, _)| stem.len() > suffix.len() && stem.ends_with(suffix.as_str()));
        match suffix {
            Some((suffix, expansion)) => {
                expansions.push(expansion);
                stem.truncate(stem.len() - suffix.len());
                let trimmed = stem.trim_end_matches('\'').len();
                stem.truncate(trimmed);
            }
            None => break,
        }
    }

    if !stem.is_empty() {
        out.push(stem);
    }
    // Suffixes were peeled from the right, so emit them in reverse.
    for expansion in expansions.iter().rev() {
        out.extend(expansion.split_whitespace().map(str::to_string));
    }
}

/// Whitespace tokens of already-normalized text.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

/// Normalized tokens minus stopwords and pure numbers. Negators survive.
pub fn content_tokens(normalized: &str, lexicon: &Lexicon, lemmatize: bool) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|t| lexicon.is_negator(t) || (!lexicon.is_stopword(t) && !is_number(t)))
        .map(|t| if lemmatize { lemma(t) } else { t.to_string() })
        .collect()
}

/// Content tokens that carry topic meaning: longer than two characters and
/// not a negator. These feed TF-IDF, term vectors, keywords and keyphrases.
pub fn terms(normalized: &str, lexicon: &Lexicon, lemmatize: bool) -> Vec<String> {
    content_tokens(normalized, lexicon, lemmatize)
        .into_iter()
        .filter(|t| t.chars().count() > 2 && !lexicon.is_negator(t))
        .collect()
}

/// Best-effort suffix stripping.
pub fn lemma(word: &str) -> String {
    let len = word.chars().count();
    if word.ends_with("ing") && len - 3 >= 3 {
        word[..word.len() - 3].to_string()
    } else if word.ends_with("ed") && len > 3 {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && len > 2 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
