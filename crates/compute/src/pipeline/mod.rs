//! Analysis pipeline orchestrator.
//!
//! Runs the stages of one analysis strictly in order:
//!
//! - **Classify**: normalize every response, score mood, tasks and pain points,
//!   extract per-response keywords.
//! - **Vectorize**: TF-IDF over the corpus, sparse term vectors, dense
//!   pseudo-embeddings.
//! - **Cluster**: agglomeration or seed partitioning per `options.method`,
//!   with a fallback to keyword partitioning when agglomeration fails.
//! - **Label**: names, summaries and keyphrases per cluster.
//! - **Aggregate**: participant timelines and task–mood statistics.

pub mod evaluation;
pub mod metrics;
pub mod stage;
pub mod task_mood;
pub mod timeline;

use diarylens_core::{AnalysisOptions, ClassifiedResponse, ClusteringMethod, Mood, Response};
use diarylens_rules::Lexicon;
use indexmap::IndexMap;
use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::algorithms::{
    agglomerative, seed_partition, Affinity, AgglomerativeParams, KeywordAffinity, Partition,
    SeedPartitionParams, TermAffinity,
};
use crate::classify::classify;
use crate::label::{make_names_unique, ClusterLabel, Labeler};
use crate::text::{dense_embeddings, normalize, term_vector, terms, top_keywords, TermVector, TfIdf};

use self::metrics::{RunMetrics, Stage};
use self::stage::{ClusteringStage, StageTracker};
use self::task_mood::{task_mood_stats, TaskMoodStat};
use self::timeline::{build_timelines, Timeline};

/// Number of aggregate TF-IDF terms reported per cluster.
pub const CLUSTER_KEYWORDS: usize = 10;

/// A labeled group of responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Position in size order, or [`Cluster::OUTLIER_ID`] for the outlier bucket.
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub top_keywords: Vec<String>,
    pub keyphrases: Vec<String>,
    pub dominant_emotion: Option<Mood>,
    pub size: usize,
    pub members: Vec<ClassifiedResponse>,
}

impl Cluster {
    pub const OUTLIER_ID: i64 = -1;

    pub fn is_outlier(&self) -> bool {
        self.id == Self::OUTLIER_ID
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    /// Every input response with its annotations, in input order.
    pub responses: Vec<ClassifiedResponse>,
    /// Non-outlier clusters, largest first.
    pub clusters: Vec<Cluster>,
    /// Responses that fit no cluster; `None` when every response was placed.
    pub outliers: Option<Cluster>,
    pub timelines: Vec<Timeline>,
    pub task_mood_stats: IndexMap<String, TaskMoodStat>,
    pub metrics: RunMetrics,
}

impl AnalysisReport {
    /// Responses placed in clusters or the outlier bucket.
    pub fn clustered_count(&self) -> usize {
        self.clusters.iter().map(|c| c.size).sum::<usize>()
            + self.outliers.as_ref().map_or(0, |o| o.size)
    }
}

/// Per-response output of the classify stage.
struct Prepared {
    classified: ClassifiedResponse,
    /// Normalized analysis text (question plus answer when configured).
    analysis_text: String,
    terms: Vec<String>,
}

/// Vectors built once per run and shared by every clustering strategy.
struct Features {
    tfidf: TfIdf,
    term_vectors: Vec<TermVector>,
    keywords: Vec<Vec<String>>,
    dense: Vec<Vec<f64>>,
}

/// One analysis run over a fixed lexicon and option set.
///
/// Holds no state between runs; independent pipelines may run in parallel.
pub struct Pipeline<'a> {
    lexicon: &'a Lexicon,
    options: &'a AnalysisOptions,
}

impl<'a> Pipeline<'a> {
    /// `options` are assumed valid; see [`AnalysisOptions::validate`].
    pub fn new(lexicon: &'a Lexicon, options: &'a AnalysisOptions) -> Self {
        Self { lexicon, options }
    }

    /// Run every stage. `rng` supplies the one random draw of seed
    /// partitioning.
    pub fn run<R: Rng + ?Sized>(&self, responses: &[Response], rng: &mut R) -> AnalysisReport {
        let run_id = Uuid::new_v4();
        let mut metrics = RunMetrics::new(self.options.method, responses.len());
        let mut stages = StageTracker::new();

        let timer = metrics.timer(Stage::Classify);
        let prepared: Vec<Prepared> = responses.par_iter().map(|r| self.prepare(r)).collect();
        timer.finish(&mut metrics);

        let mut classified = Vec::with_capacity(prepared.len());
        let mut analysis_texts = Vec::with_capacity(prepared.len());
        let mut term_lists = Vec::with_capacity(prepared.len());
        for p in prepared {
            classified.push(p.classified);
            analysis_texts.push(p.analysis_text);
            term_lists.push(p.terms);
        }

        stages.advance(ClusteringStage::ComputingVectors);
        let timer = metrics.timer(Stage::Vectorize);
        let features = Features {
            tfidf: TfIdf::fit(&term_lists),
            term_vectors: term_lists.iter().map(|t| term_vector(t)).collect(),
            keywords: classified.iter().map(|c| c.keywords.clone()).collect(),
            dense: if self.options.method == ClusteringMethod::Semantic {
                dense_embeddings(&analysis_texts)
            } else {
                Vec::new()
            },
        };
        timer.finish(&mut metrics);

        let timer = metrics.timer(Stage::Cluster);
        let partition = self.cluster(&features, &mut metrics, &mut stages, rng);
        timer.finish(&mut metrics);

        stages.advance(ClusteringStage::Labeling);
        let timer = metrics.timer(Stage::Label);
        let (clusters, outliers) = self.label(&partition, &classified, &term_lists, &features.tfidf);
        timer.finish(&mut metrics);
        stages.advance(ClusteringStage::Done);

        let timer = metrics.timer(Stage::Aggregate);
        let timelines = build_timelines(&classified);
        let task_mood_stats = task_mood_stats(&classified);
        timer.finish(&mut metrics);

        metrics.finish();
        info!(
            %run_id,
            method = %metrics.used_method,
            responses = classified.len(),
            clusters = clusters.len(),
            outliers = outliers.as_ref().map_or(0, |o| o.size),
            total_ms = metrics.total_ms,
            "analysis run completed"
        );

        AnalysisReport {
            run_id,
            responses: classified,
            clusters,
            outliers,
            timelines,
            task_mood_stats,
            metrics,
        }
    }

    fn prepare(&self, response: &Response) -> Prepared {
        let lemmatize = self.options.lemmatize;
        let classification = classify(&response.text, self.lexicon);
        let analysis_text = normalize(
            &response.analysis_text(self.options.include_question_in_text),
            self.lexicon,
        );
        let terms = terms(&analysis_text, self.lexicon, lemmatize);
        let keywords = top_keywords(&terms, self.options.keywords_per_response);

        let classified = ClassifiedResponse {
            response: response.clone(),
            is_pain_point: classification.is_pain_point(),
            normalized_text: classification.normalized,
            mood: classification.mood,
            task_categories: classification.tasks,
            pain_indicators: classification.pain_indicators,
            keywords,
        };
        Prepared {
            classified,
            analysis_text,
            terms,
        }
    }

    fn cluster<R: Rng + ?Sized>(
        &self,
        features: &Features,
        metrics: &mut RunMetrics,
        stages: &mut StageTracker,
        rng: &mut R,
    ) -> Partition {
        match self.options.method {
            ClusteringMethod::Semantic => {
                stages.advance(ClusteringStage::ComputingDistances);
                let params = AgglomerativeParams {
                    distance_threshold: self.options.distance_threshold,
                    min_cluster_size: self.options.min_cluster_size,
                    max_items: self.options.max_semantic_items,
                };
                match agglomerative(&features.dense, &params) {
                    Ok(partition) => {
                        let n = features.dense.len() as u64;
                        metrics.pairwise_comparisons = n * n.saturating_sub(1) / 2;
                        stages.advance(ClusteringStage::Assigning);
                        partition
                    }
                    Err(e) => {
                        warn!(error = %e, "semantic clustering failed, falling back to keyword partitioning");
                        metrics.record_fallback(ClusteringMethod::Keyword, e.to_string());
                        let affinity = KeywordAffinity::new(&features.keywords);
                        self.partition_with(&affinity, stages, rng)
                    }
                }
            }
            ClusteringMethod::Keyword => {
                let affinity = KeywordAffinity::new(&features.keywords);
                self.partition_with(&affinity, stages, rng)
            }
            ClusteringMethod::Lexical => {
                let affinity = TermAffinity::new(&features.term_vectors, &features.keywords);
                self.partition_with(&affinity, stages, rng)
            }
        }
    }

    /// Seed partitioning; a failure here leaves every response in the
    /// outlier bucket.
    fn partition_with<A, R>(&self, affinity: &A, stages: &mut StageTracker, rng: &mut R) -> Partition
    where
        A: Affinity + ?Sized,
        R: Rng + ?Sized,
    {
        stages.advance(ClusteringStage::ComputingSeeds);
        let params = SeedPartitionParams {
            num_groups: self.options.num_groups,
            similarity_threshold: self.options.similarity_threshold,
            min_cluster_size: self.options.min_cluster_size,
        };
        let partition = match seed_partition(affinity, &params, rng) {
            Ok(partition) => partition,
            Err(e) => {
                warn!(error = %e, "seed partitioning failed, routing every response to outliers");
                Partition {
                    groups: Vec::new(),
                    outliers: (0..affinity.len()).collect(),
                }
            }
        };
        stages.advance(ClusteringStage::Assigning);
        partition
    }

    fn label(
        &self,
        partition: &Partition,
        classified: &[ClassifiedResponse],
        term_lists: &[Vec<String>],
        tfidf: &TfIdf,
    ) -> (Vec<Cluster>, Option<Cluster>) {
        let labeler = Labeler::new(self.lexicon);

        let mut drafts: Vec<(&[usize], Vec<String>, ClusterLabel)> = partition
            .groups
            .iter()
            .map(|members| {
                let keywords = tfidf.top_terms(members, CLUSTER_KEYWORDS);
                let (texts, terms) = gather(members, classified, term_lists);
                let label = labeler.label(&texts, &terms, &keywords);
                (members.as_slice(), keywords, label)
            })
            .collect();
        // Stable: equal sizes keep partition order.
        drafts.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut names: Vec<String> = drafts.iter().map(|(_, _, l)| l.name.clone()).collect();
        make_names_unique(&mut names);

        let clusters: Vec<Cluster> = drafts
            .into_iter()
            .zip(names)
            .enumerate()
            .map(|(id, ((members, keywords, label), name))| Cluster {
                id: id as i64,
                name,
                summary: label.summary,
                top_keywords: keywords,
                keyphrases: label.keyphrases,
                dominant_emotion: label.dominant_emotion,
                size: members.len(),
                members: members.iter().map(|&i| classified[i].clone()).collect(),
            })
            .collect();

        let outliers = if partition.outliers.is_empty() {
            None
        } else {
            let members = &partition.outliers;
            let (texts, terms) = gather(members, classified, term_lists);
            let label = labeler.label_outliers(&texts, &terms);
            Some(Cluster {
                id: Cluster::OUTLIER_ID,
                name: label.name,
                summary: label.summary,
                top_keywords: tfidf.top_terms(members, CLUSTER_KEYWORDS),
                keyphrases: label.keyphrases,
                dominant_emotion: label.dominant_emotion,
                size: members.len(),
                members: members.iter().map(|&i| classified[i].clone()).collect(),
            })
        };

        debug!(
            clusters = clusters.len(),
            outliers = partition.outliers.len(),
            "clusters labeled"
        );
        (clusters, outliers)
    }
}

/// Raw answers and term lists of the given members.
fn gather<'c>(
    members: &[usize],
    classified: &'c [ClassifiedResponse],
    term_lists: &[Vec<String>],
) -> (Vec<&'c str>, Vec<Vec<String>>) {
    let texts = members
        .iter()
        .map(|&i| classified[i].response.text.as_str())
        .collect();
    let terms = members.iter().map(|&i| term_lists[i].clone()).collect();
    (texts, terms)
}
