use rand::Rng;
use tracing::debug;

use crate::algorithms::{ClusteringError, Partition};
use crate::similarity::{group_similarity, jaccard, sparse_cosine};
use crate::text::{merge_keywords, TermVector};

/// Cap on the merged keyword list each group carries.
pub const GROUP_KEYWORD_CAP: usize = 10;

/// A group under construction: its members and merged keywords.
#[derive(Debug, Clone, Default)]
pub struct SeedGroup {
    pub members: Vec<usize>,
    pub keywords: Vec<String>,
}

/// How items relate to each other and to groups during seed partitioning.
pub trait Affinity {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item-to-item similarity in [0, 1], used to spread seeds apart.
    fn similarity(&self, a: usize, b: usize) -> f64;

    /// Similarity of `item` to a group, or `None` when the group cannot
    /// attract members yet.
    fn group_similarity(&self, item: usize, group: &SeedGroup) -> Option<f64>;

    /// Keywords merged into a group when `item` joins it.
    fn keywords(&self, item: usize) -> &[String];
}

/// Jaccard over keyword sets; groups are compared through their merged
/// keyword list.
pub struct KeywordAffinity<'a> {
    keywords: &'a [Vec<String>],
}

impl<'a> KeywordAffinity<'a> {
    pub fn new(keywords: &'a [Vec<String>]) -> Self {
        Self { keywords }
    }
}

impl Affinity for KeywordAffinity<'_> {
    fn len(&self) -> usize {
        self.keywords.len()
    }

    fn similarity(&self, a: usize, b: usize) -> f64 {
        jaccard(&self.keywords[a], &self.keywords[b])
    }

    fn group_similarity(&self, item: usize, group: &SeedGroup) -> Option<f64> {
        if group.keywords.is_empty() {
            return None;
        }
        Some(jaccard(&self.keywords[item], &group.keywords))
    }

    fn keywords(&self, item: usize) -> &[String] {
        &self.keywords[item]
    }
}

/// Sparse cosine over term vectors; groups are compared by the average
/// similarity to their members.
pub struct TermAffinity<'a> {
    vectors: &'a [TermVector],
    keywords: &'a [Vec<String>],
}

impl<'a> TermAffinity<'a> {
    pub fn new(vectors: &'a [TermVector], keywords: &'a [Vec<String>]) -> Self {
        debug_assert_eq!(vectors.len(), keywords.len());
        Self { vectors, keywords }
    }
}

impl Affinity for TermAffinity<'_> {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn similarity(&self, a: usize, b: usize) -> f64 {
        sparse_cosine(&self.vectors[a], &self.vectors[b])
    }

    fn group_similarity(&self, item: usize, group: &SeedGroup) -> Option<f64> {
        if group.members.is_empty() {
            return None;
        }
        Some(group_similarity(&item, &group.members, |a, b| {
            self.similarity(*a, *b)
        }))
    }

    fn keywords(&self, item: usize) -> &[String] {
        &self.keywords[item]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeedPartitionParams {
    /// Target number of groups; fewer are formed when there are fewer items.
    pub num_groups: usize,
    /// A group must beat this similarity to attract an item.
    pub similarity_threshold: f64,
    pub min_cluster_size: usize,
}

/// Seed-diversified partitioning.
///
/// The first seed is drawn from `rng`; this is the only random step. Each
/// further seed is the unseeded item whose minimum distance (`1 − similarity`)
/// to the current seeds is largest, ties going to the lowest index. Every
/// other item, in index order, joins the most similar group above the
/// threshold, or the currently smallest group when none qualifies.
pub fn seed_partition<A, R>(
    affinity: &A,
    params: &SeedPartitionParams,
    rng: &mut R,
) -> Result<Partition, ClusteringError>
where
    A: Affinity + ?Sized,
    R: Rng + ?Sized,
{
    if params.num_groups == 0 {
        return Err(ClusteringError::InvalidParameter(
            "num_groups must be at least 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&params.similarity_threshold) {
        return Err(ClusteringError::InvalidParameter(format!(
            "similarity_threshold {} outside [0, 1]",
            params.similarity_threshold
        )));
    }

    let n = affinity.len();
    if n == 0 {
        return Ok(Partition::default());
    }

    let seeds = pick_seeds(affinity, params.num_groups.min(n), rng);
    debug!(?seeds, "seeds selected");

    let mut assigned = vec![false; n];
    let mut groups: Vec<SeedGroup> = seeds
        .iter()
        .map(|&seed| {
            assigned[seed] = true;
            SeedGroup {
                members: vec![seed],
                keywords: affinity.keywords(seed).to_vec(),
            }
        })
        .collect();

    for item in 0..n {
        if assigned[item] {
            continue;
        }

        let mut best: Option<usize> = None;
        let mut best_sim = -1.0;
        for (g, group) in groups.iter().enumerate() {
            let Some(sim) = affinity.group_similarity(item, group) else {
                continue;
            };
            if sim > best_sim && sim > params.similarity_threshold {
                best_sim = sim;
                best = Some(g);
            }
        }

        let target = best.unwrap_or_else(|| smallest_group(&groups));
        let group = &mut groups[target];
        group.members.push(item);
        group.keywords = merge_keywords(&group.keywords, affinity.keywords(item), GROUP_KEYWORD_CAP);
        assigned[item] = true;
    }

    let partition = Partition {
        groups: groups
            .into_iter()
            .map(|mut g| {
                g.members.sort_unstable();
                g.members
            })
            .collect(),
        outliers: Vec::new(),
    };
    Ok(partition.enforce_min_size(params.min_cluster_size))
}

fn pick_seeds<A, R>(affinity: &A, k: usize, rng: &mut R) -> Vec<usize>
where
    A: Affinity + ?Sized,
    R: Rng + ?Sized,
{
    let n = affinity.len();
    let mut seeds = Vec::with_capacity(k);
    let mut is_seed = vec![false; n];

    let first = rng.gen_range(0..n);
    seeds.push(first);
    is_seed[first] = true;

    while seeds.len() < k {
        let mut next: Option<usize> = None;
        let mut best_distance = f64::NEG_INFINITY;

        for candidate in 0..n {
            if is_seed[candidate] {
                continue;
            }
            let min_distance = seeds
                .iter()
                .map(|&s| 1.0 - affinity.similarity(s, candidate))
                .fold(f64::INFINITY, f64::min);
            if min_distance > best_distance {
                best_distance = min_distance;
                next = Some(candidate);
            }
        }

        match next {
            Some(seed) => {
                seeds.push(seed);
                is_seed[seed] = true;
            }
            None => break,
        }
    }
    seeds
}

/// Index of the group with the fewest members, lowest index on ties.
fn smallest_group(groups: &[SeedGroup]) -> usize {
    groups
        .iter()
        .enumerate()
        .min_by_key(|(i, g)| (g.members.len(), *i))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
