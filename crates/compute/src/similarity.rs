//! Similarity measures. Every measure returns 0 for degenerate input
//! (zero vectors, empty maps, empty sets) instead of dividing by zero.

use std::collections::HashSet;

use crate::text::TermVector;

/// Cosine similarity of two dense vectors.
///
/// # Panics
/// Panics if the vectors differ in length; that is a caller bug.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "cosine: vectors must have the same length");

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}

/// Cosine similarity of two sparse term maps over their shared keys.
pub fn sparse_cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let dot: f64 = a
        .iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum();
    let mag_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let mag_b = b.values().map(|v| v * v).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        0.0
    } else {
        dot / (mag_a * mag_b)
    }
}

/// Jaccard similarity of two keyword sets. Two empty sets score 0, not 1,
/// so that keyword-less responses never look identical.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(|s| s.as_ref()).collect();
    let set_b: HashSet<&str> = b.iter().map(|s| s.as_ref()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// Mean similarity of `item` against every member of `group`; 0 for an
/// empty group.
pub fn group_similarity<T, F>(item: &T, group: &[T], measure: F) -> f64
where
    F: Fn(&T, &T) -> f64,
{
    if group.is_empty() {
        return 0.0;
    }
    group.iter().map(|member| measure(item, member)).sum::<f64>() / group.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::term_vector;

    #[test]
    fn cosine_self_is_one() {
        let a = [0.3, -1.2, 4.0];
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = [1.0, 2.0, 0.5];
        let b = [0.2, -0.4, 3.0];
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn cosine_rejects_mismatched_lengths() {
        cosine(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    fn sparse_cosine_uses_shared_keys() {
        let a = term_vector(&["bill", "gas"]);
        let b = term_vector(&["bill", "water"]);
        assert!((sparse_cosine(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(sparse_cosine(&a, &TermVector::new()), 0.0);
    }

    #[test]
    fn jaccard_edge_cases() {
        let empty: [&str; 0] = [];
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(jaccard(&["a", "b"], &["a", "b"]), 1.0);
        assert!((jaccard(&["a", "b"], &["b", "c"]) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn group_similarity_averages_and_handles_empty() {
        let measure = |a: &Vec<f64>, b: &Vec<f64>| cosine(a, b);
        let item = vec![1.0, 0.0];
        let group = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert!((group_similarity(&item, &group, measure) - 0.5).abs() < 1e-12);
        assert_eq!(group_similarity(&item, &[], measure), 0.0);
    }
}
