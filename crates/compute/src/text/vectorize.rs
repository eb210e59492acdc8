use indexmap::IndexMap;
use rayon::prelude::*;

/// Dimension of the dense pseudo-embedding.
pub const DENSE_DIM: usize = 128;

/// Sparse term → frequency map.
pub type TermVector = IndexMap<String, f64>;

/// Deterministic character-code embedding of normalized text.
///
/// Character `j` of token `i` with code `c` adds `c / 1000` to dimension
/// `(i * j + c) mod 128`; the result is L2-normalized. This is not a learned
/// representation: identical text always yields an identical vector, and the
/// zero vector is returned for empty text.
pub fn dense_embedding(normalized: &str) -> Vec<f64> {
    let mut embedding = vec![0.0; DENSE_DIM];

    for (i, token) in normalized.split_whitespace().enumerate() {
        for (j, ch) in token.chars().enumerate() {
            let code = ch as usize;
            let dim = (i.wrapping_mul(j).wrapping_add(code)) % DENSE_DIM;
            embedding[dim] += code as f64 / 1000.0;
        }
    }

    let magnitude = embedding.iter().map(|v| v * v).sum::<f64>().sqrt();
    if magnitude > 0.0 {
        for v in &mut embedding {
            *v /= magnitude;
        }
    }
    embedding
}

/// Embed many texts in parallel; output order matches input order.
pub fn dense_embeddings<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Vec<f64>> {
    texts
        .par_iter()
        .map(|t| dense_embedding(t.as_ref()))
        .collect()
}

/// Plain term-frequency map, keyed in first-occurrence order.
pub fn term_vector<S: AsRef<str>>(terms: &[S]) -> TermVector {
    let mut tf = TermVector::new();
    for term in terms {
        *tf.entry(term.as_ref().to_string()).or_insert(0.0) += 1.0;
    }
    tf
}
