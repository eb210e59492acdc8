use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use diarylens_core::ClusteringMethod;
use serde::Serialize;

/// Timed stages of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classify,
    Vectorize,
    Cluster,
    Label,
    Aggregate,
}

/// Per-run performance and provenance metrics, attached to every report.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub started_at: DateTime<Utc>,
    /// Wall-clock milliseconds per stage.
    pub classify_ms: u64,
    pub vectorize_ms: u64,
    pub cluster_ms: u64,
    pub label_ms: u64,
    pub aggregate_ms: u64,
    pub total_ms: u64,

    pub responses_processed: usize,
    /// Pairwise distances computed by the agglomerative strategy.
    pub pairwise_comparisons: u64,

    pub requested_method: ClusteringMethod,
    /// Strategy that produced the clusters; differs from the requested one
    /// after a fallback.
    pub used_method: ClusteringMethod,
    pub fallback_reason: Option<String>,
}

impl RunMetrics {
    pub fn new(requested_method: ClusteringMethod, responses_processed: usize) -> Self {
        Self {
            started_at: Utc::now(),
            classify_ms: 0,
            vectorize_ms: 0,
            cluster_ms: 0,
            label_ms: 0,
            aggregate_ms: 0,
            total_ms: 0,
            responses_processed,
            pairwise_comparisons: 0,
            requested_method,
            used_method: requested_method,
            fallback_reason: None,
        }
    }

    /// Record the duration of one stage. Repeated stages accumulate.
    pub fn record_stage(&mut self, stage: Stage, elapsed: Duration) {
        let ms = elapsed.as_millis() as u64;
        let slot = match stage {
            Stage::Classify => &mut self.classify_ms,
            Stage::Vectorize => &mut self.vectorize_ms,
            Stage::Cluster => &mut self.cluster_ms,
            Stage::Label => &mut self.label_ms,
            Stage::Aggregate => &mut self.aggregate_ms,
        };
        *slot += ms;
    }

    /// Record that the requested strategy failed and another one was used.
    pub fn record_fallback(&mut self, used: ClusteringMethod, reason: impl Into<String>) {
        self.used_method = used;
        self.fallback_reason = Some(reason.into());
    }

    pub fn finish(&mut self) {
        let elapsed = Utc::now() - self.started_at;
        self.total_ms = elapsed.num_milliseconds().max(0) as u64;
    }

    /// Start a scoped timer for `stage`.
    pub fn timer(&self, stage: Stage) -> StageTimer {
        StageTimer {
            stage,
            start: Instant::now(),
        }
    }
}

/// A scoped stage timer.
pub struct StageTimer {
    stage: Stage,
    start: Instant,
}

impl StageTimer {
    /// Finalize the timer and record its duration.
    pub fn finish(self, metrics: &mut RunMetrics) {
        metrics.record_stage(self.stage, self.start.elapsed());
    }
}
