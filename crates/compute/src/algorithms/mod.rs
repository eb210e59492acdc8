//! Clustering strategies.
//!
//! Both strategies return a [`Partition`] of item indices: every input index
//! lands in exactly one group or in the outlier bucket.

pub mod agglomerative;
pub mod seed_partition;

pub use agglomerative::{agglomerative, AgglomerativeParams};
pub use seed_partition::{
    seed_partition, Affinity, KeywordAffinity, SeedGroup, SeedPartitionParams, TermAffinity,
};

/// Why a clustering strategy could not produce a partition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusteringError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("vector {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("non-finite distance between items {i} and {j}")]
    NonFiniteDistance { i: usize, j: usize },
    #[error("corpus of {size} items exceeds the pairwise limit of {limit}")]
    CorpusTooLarge { size: usize, limit: usize },
}

/// Groups of item indices plus the shared outlier bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Member indices per group, ascending within each group.
    pub groups: Vec<Vec<usize>>,
    /// Items in no group, ascending.
    pub outliers: Vec<usize>,
}

impl Partition {
    /// Move every group smaller than `min_size` into the outlier bucket and
    /// drop empty groups.
    pub fn enforce_min_size(mut self, min_size: usize) -> Self {
        let (keep, small): (Vec<Vec<usize>>, Vec<Vec<usize>>) = self
            .groups
            .into_iter()
            .filter(|g| !g.is_empty())
            .partition(|g| g.len() >= min_size);
        self.groups = keep;
        self.outliers.extend(small.into_iter().flatten());
        self.outliers.sort_unstable();
        self
    }

    /// Total number of items across groups and outliers.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum::<usize>() + self.outliers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforce_min_size_routes_small_groups_to_outliers() {
        let partition = Partition {
            groups: vec![vec![0, 2], vec![4], vec![], vec![1, 3, 5]],
            outliers: vec![6],
        }
        .enforce_min_size(2);

        assert_eq!(partition.groups, vec![vec![0, 2], vec![1, 3, 5]]);
        assert_eq!(partition.outliers, vec![4, 6]);
        assert_eq!(partition.item_count(), 7);
    }

    #[test]
    fn min_size_one_keeps_singletons() {
        let partition = Partition {
            groups: vec![vec![0], vec![1, 2]],
            outliers: vec![],
        }
        .enforce_min_size(1);
        assert_eq!(partition.groups.len(), 2);
        assert!(partition.outliers.is_empty());
    }
}
