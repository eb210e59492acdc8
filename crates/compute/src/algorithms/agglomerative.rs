use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::{ClusteringError, Partition};
use crate::similarity::cosine;

#[derive(Debug, Clone, Copy)]
pub struct AgglomerativeParams {
    /// Pairs at or below this cosine distance are merged.
    pub distance_threshold: f64,
    pub min_cluster_size: usize,
    /// Upper bound on corpus size; pairwise work grows as n².
    pub max_items: usize,
}

/// Single-linkage agglomeration with a fixed cut.
///
/// All pairwise distances (`1 − cosine`) are sorted ascending, ties broken
/// by `(i, j)`, and the endpoints of every pair within the threshold are
/// union-merged. Groups below `min_cluster_size` become outliers. Groups are
/// ordered by their lowest member index.
pub fn agglomerative(
    vectors: &[Vec<f64>],
    params: &AgglomerativeParams,
) -> Result<Partition, ClusteringError> {
    if !(0.0..=1.0).contains(&params.distance_threshold) {
        return Err(ClusteringError::InvalidParameter(format!(
            "distance_threshold {} outside [0, 1]",
            params.distance_threshold
        )));
    }
    let n = vectors.len();
    if n > params.max_items {
        return Err(ClusteringError::CorpusTooLarge {
            size: n,
            limit: params.max_items,
        });
    }
    if n == 0 {
        return Ok(Partition::default());
    }

    let expected = vectors[0].len();
    if let Some((index, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != expected) {
        return Err(ClusteringError::DimensionMismatch {
            index,
            expected,
            found: v.len(),
        });
    }

    let mut pairs: Vec<(f64, usize, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            ((i + 1)..n).map(move |j| (1.0 - cosine(&vectors[i], &vectors[j]), i, j))
        })
        .collect();

    if let Some(&(_, i, j)) = pairs.iter().find(|(d, _, _)| !d.is_finite()) {
        return Err(ClusteringError::NonFiniteDistance { i, j });
    }

    pairs.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });

    let mut sets = DisjointSet::new(n);
    let mut merges = 0usize;
    for &(distance, i, j) in &pairs {
        if distance > params.distance_threshold {
            break;
        }
        if sets.union(i, j) {
            merges += 1;
        }
    }
    debug!(
        items = n,
        comparisons = pairs.len(),
        merges,
        "pairwise agglomeration finished"
    );

    let mut by_root: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for item in 0..n {
        by_root.entry(sets.find(item)).or_default().push(item);
    }

    let partition = Partition {
        groups: by_root.into_values().collect(),
        outliers: Vec::new(),
    };
    Ok(partition.enforce_min_size(params.min_cluster_size))
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns `false` when `a` and `b` were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(distance_threshold: f64, min_cluster_size: usize) -> AgglomerativeParams {
        AgglomerativeParams {
            distance_threshold,
            min_cluster_size,
            max_items: 1000,
        }
    }

    #[test]
    fn merges_close_pairs_and_isolates_far_points() {
        let vectors = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.99, 0.05],
            vec![0.05, 0.99],
            vec![-1.0, 0.0],
        ];
        let partition = agglomerative(&vectors, &params(0.1, 2)).unwrap();
        assert_eq!(partition.groups, vec![vec![0, 2], vec![1, 3]]);
        assert_eq!(partition.outliers, vec![4]);
    }

    #[test]
    fn single_linkage_chains() {
        // 0–1 and 1–2 are close, 0–2 is not: single linkage still joins all three.
        let a = 0.0f64;
        let b = 0.4f64;
        let c = 0.8f64;
        let vectors: Vec<Vec<f64>> = [a, b, c].iter().map(|t| vec![t.cos(), t.sin()]).collect();
        let partition = agglomerative(&vectors, &params(0.1, 1)).unwrap();
        assert_eq!(partition.groups, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn zero_threshold_only_merges_identical_directions() {
        let vectors = vec![vec![1.0, 0.0], vec![2.0, 0.0], vec![0.0, 1.0]];
        let partition = agglomerative(&vectors, &params(0.0, 1)).unwrap();
        assert_eq!(partition.groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let vectors = vec![vec![1.0, 0.0], vec![1.0]];
        let err = agglomerative(&vectors, &params(0.5, 1)).unwrap_err();
        assert_eq!(
            err,
            ClusteringError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn corpus_limit_is_enforced() {
        let vectors = vec![vec![1.0]; 5];
        let mut p = params(0.5, 1);
        p.max_items = 4;
        assert!(matches!(
            agglomerative(&vectors, &p),
            Err(ClusteringError::CorpusTooLarge { size: 5, limit: 4 })
        ));
    }

    #[test]
    fn non_finite_input_is_reported() {
        let vectors = vec![vec![f64::NAN, 1.0], vec![1.0, 1.0]];
        assert!(matches!(
            agglomerative(&vectors, &params(0.5, 1)),
            Err(ClusteringError::NonFiniteDistance { i: 0, j: 1 })
        ));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        assert!(agglomerative(&[vec![1.0]], &params(1.5, 1)).is_err());
    }

    #[test]
    fn zero_vectors_never_merge_under_strict_threshold() {
        // Cosine of a zero vector is 0, so its distance to anything is 1.
        let vectors = vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![1.0, 0.0]];
        let partition = agglomerative(&vectors, &params(0.5, 2)).unwrap();
        assert!(partition.groups.is_empty());
        assert_eq!(partition.outliers, vec![0, 1, 2]);
    }
}
