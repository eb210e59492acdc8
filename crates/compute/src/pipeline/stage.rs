use std::fmt;

use tracing::debug;

/// Progress of one clustering run.
///
/// A run moves strictly forward: `Idle → ComputingVectors →
/// ComputingDistances | ComputingSeeds → Assigning → Labeling → Done`.
/// A fallback from agglomeration to partitioning re-enters
/// `ComputingSeeds` from `ComputingDistances` or `Assigning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusteringStage {
    Idle,
    ComputingVectors,
    ComputingDistances,
    ComputingSeeds,
    Assigning,
    Labeling,
    Done,
}

impl ClusteringStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusteringStage::Idle => "idle",
            ClusteringStage::ComputingVectors => "computing_vectors",
            ClusteringStage::ComputingDistances => "computing_distances",
            ClusteringStage::ComputingSeeds => "computing_seeds",
            ClusteringStage::Assigning => "assigning",
            ClusteringStage::Labeling => "labeling",
            ClusteringStage::Done => "done",
        }
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_advance_to(&self, next: ClusteringStage) -> bool {
        use ClusteringStage::*;
        matches!(
            (self, next),
            (Idle, ComputingVectors)
                | (ComputingVectors, ComputingDistances)
                | (ComputingVectors, ComputingSeeds)
                | (ComputingDistances, Assigning)
                | (ComputingSeeds, Assigning)
                | (ComputingDistances, ComputingSeeds)
                | (Assigning, ComputingSeeds)
                | (Assigning, Labeling)
                | (Labeling, Done)
        )
    }
}

impl fmt::Display for ClusteringStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the current [`ClusteringStage`] and logs every transition.
#[derive(Debug)]
pub struct StageTracker {
    current: ClusteringStage,
    history: Vec<ClusteringStage>,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            current: ClusteringStage::Idle,
            history: vec![ClusteringStage::Idle],
        }
    }

    pub fn current(&self) -> ClusteringStage {
        self.current
    }

    /// Every stage visited so far, starting with `Idle`.
    pub fn history(&self) -> &[ClusteringStage] {
        &self.history
    }

    /// Move to `next`. Illegal transitions are a programming error.
    pub fn advance(&mut self, next: ClusteringStage) {
        debug_assert!(
            self.current.can_advance_to(next),
            "illegal clustering transition {} -> {}",
            self.current,
            next
        );
        debug!(from = %self.current, to = %next, "clustering stage transition");
        self.current = next;
        self.history.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ClusteringStage::*;

    #[test]
    fn semantic_path_is_legal() {
        let mut tracker = StageTracker::new();
        for stage in [ComputingVectors, ComputingDistances, Assigning, Labeling, Done] {
            tracker.advance(stage);
        }
        assert_eq!(tracker.current(), Done);
        assert_eq!(tracker.history().len(), 6);
    }

    #[test]
    fn fallback_reenters_seed_computation() {
        assert!(ComputingDistances.can_advance_to(ComputingSeeds));
        assert!(Assigning.can_advance_to(ComputingSeeds));
        assert!(!Labeling.can_advance_to(ComputingSeeds));
    }

    #[test]
    fn no_skipping_or_going_back() {
        assert!(!Idle.can_advance_to(Assigning));
        assert!(!Done.can_advance_to(Idle));
        assert!(!Labeling.can_advance_to(Assigning));
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(ComputingDistances.to_string(), "computing_distances");
    }
}
