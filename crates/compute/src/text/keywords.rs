//! Frequency-ranked keywords and n-gram keyphrases.

use indexmap::IndexMap;

/// Rank `items` by count, most frequent first; ties keep first-seen order.
fn rank_by_frequency<I, S>(items: I, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut freq: IndexMap<String, usize> = IndexMap::new();
    for item in items {
        *freq.entry(item.into()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(term, _)| term).collect()
}

/// Most frequent terms of one document.
pub fn top_keywords<S: AsRef<str>>(terms: &[S], n: usize) -> Vec<String> {
    rank_by_frequency(terms.iter().map(|t| t.as_ref().to_string()), n)
}

/// 1–3 token n-grams across several documents, ranked by frequency.
/// N-grams never span two documents.
pub fn keyphrases<S: AsRef<str>>(documents: &[Vec<S>], n: usize) -> Vec<String> {
    let mut grams: Vec<String> = Vec::new();
    for doc in documents {
        let words: Vec<&str> = doc.iter().map(|w| w.as_ref()).collect();
        for size in 1..=3 {
            grams.extend(words.windows(size).map(|w| w.join(" ")));
        }
    }
    rank_by_frequency(grams, n)
}

/// Merge `incoming` into `current` as a frequency-ranked union capped at
/// `cap`. Entries already in `current` win ties.
pub fn merge_keywords(current: &[String], incoming: &[String], cap: usize) -> Vec<String> {
    rank_by_frequency(current.iter().chain(incoming).cloned(), cap)
}
