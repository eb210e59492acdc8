pub mod algorithms;
pub mod classify;
pub mod engine;
pub mod label;
pub mod pipeline;
pub mod similarity;
pub mod text;

pub use algorithms::{ClusteringError, Partition};
pub use engine::AnalysisEngine;
pub use pipeline::evaluation::{evaluate, EvaluationPackage, QualityReport};
pub use pipeline::metrics::RunMetrics;
pub use pipeline::stage::ClusteringStage;
pub use pipeline::task_mood::TaskMoodStat;
pub use pipeline::timeline::{Timeline, TimelinePoint};
pub use pipeline::{AnalysisReport, Cluster, Pipeline};
