//! Heuristic quality scoring of a clustering result, and the package handed
//! to an external scorer.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::{AnalysisReport, Cluster};

pub const EVALUATION_REQUEST: &str = "Please evaluate the effectiveness of this affinity mapping \
     based on the coherence of groups and the relevance of the summaries.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterQuality {
    pub cluster_id: i64,
    pub name: String,
    pub response_count: usize,
    /// Mean share of members mentioning each keyword.
    pub keyword_relevance: f64,
    /// `1 − distinct questions / size`.
    pub question_consistency: f64,
    pub coherence: f64,
    /// Coherence on a 0–5 scale.
    pub rating: u8,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallQuality {
    pub total_groups: usize,
    pub total_responses: usize,
    pub avg_responses_per_group: f64,
    /// Smallest cluster size over largest.
    pub balance_ratio: f64,
    pub avg_coherence: f64,
    pub balance_score: f64,
    pub overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub overall: OverallQuality,
    pub clusters: Vec<ClusterQuality>,
    pub feedback: String,
}

/// Score the non-outlier clusters of a report.
pub fn evaluate(report: &AnalysisReport) -> QualityReport {
    evaluate_clusters(&report.clusters)
}

/// Score `clusters`; outlier buckets among them are skipped.
pub fn evaluate_clusters(clusters: &[Cluster]) -> QualityReport {
    let clusters: Vec<&Cluster> = clusters.iter().filter(|c| !c.is_outlier()).collect();
    if clusters.is_empty() {
        return QualityReport {
            overall: OverallQuality::default(),
            clusters: Vec::new(),
            feedback: "There are no clusters to evaluate.".to_string(),
        };
    }

    let scored: Vec<ClusterQuality> = clusters.iter().map(|c| score_cluster(c)).collect();

    let total_groups = clusters.len();
    let total_responses: usize = clusters.iter().map(|c| c.size).sum();
    let largest = clusters.iter().map(|c| c.size).max().unwrap_or(0);
    let smallest = clusters.iter().map(|c| c.size).min().unwrap_or(0);
    let balance_ratio = ratio(smallest, largest);
    let avg_coherence = scored.iter().map(|q| q.coherence).sum::<f64>() / total_groups as f64;
    let balance_score = balance_ratio * 0.8 + 0.2;
    let overall_score = avg_coherence * 0.7 + balance_score * 0.3;

    let low_coherence = scored.iter().filter(|q| q.coherence < 0.5).count();
    let feedback = overall_feedback(overall_score, avg_coherence, balance_ratio, low_coherence);

    QualityReport {
        overall: OverallQuality {
            total_groups,
            total_responses,
            avg_responses_per_group: total_responses as f64 / total_groups as f64,
            balance_ratio,
            avg_coherence,
            balance_score,
            overall_score,
        },
        clusters: scored,
        feedback,
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn score_cluster(cluster: &Cluster) -> ClusterQuality {
    let size = cluster.members.len();
    let haystacks: Vec<(String, String)> = cluster
        .members
        .iter()
        .map(|m| (m.response.text.to_lowercase(), m.response.question.to_lowercase()))
        .collect();

    let keyword_relevance = if cluster.top_keywords.is_empty() {
        0.0
    } else {
        let total: f64 = cluster
            .top_keywords
            .iter()
            .map(|k| {
                let k = k.to_lowercase();
                let hits = haystacks
                    .iter()
                    .filter(|(text, question)| text.contains(&k) || question.contains(&k))
                    .count();
                ratio(hits, size)
            })
            .sum();
        total / cluster.top_keywords.len() as f64
    };

    let distinct_questions: HashSet<&str> = cluster
        .members
        .iter()
        .map(|m| m.response.question.as_str())
        .collect();
    let question_consistency = if size == 0 {
        0.0
    } else {
        1.0 - ratio(distinct_questions.len(), size)
    };

    let coherence = keyword_relevance * 0.7 + question_consistency * 0.3;
    ClusterQuality {
        cluster_id: cluster.id,
        name: cluster.name.clone(),
        response_count: size,
        keyword_relevance,
        question_consistency,
        coherence,
        rating: (coherence * 5.0).round().clamp(0.0, 5.0) as u8,
        feedback: cluster_feedback(coherence, &cluster.summary, keyword_relevance, question_consistency),
    }
}

fn cluster_feedback(coherence: f64, summary: &str, relevance: f64, consistency: f64) -> String {
    let mut feedback = if coherence > 0.8 {
        format!("This is a highly coherent group with strong thematic consistency. The summary \"{summary}\" accurately reflects the content.")
    } else if coherence > 0.6 {
        format!("This is a good group with clear thematic connections. The summary \"{summary}\" is relevant to most responses.")
    } else if coherence > 0.4 {
        format!("This group has moderate coherence. The summary \"{summary}\" captures some themes but might be refined.")
    } else {
        format!("This group lacks strong coherence. The summary \"{summary}\" may not accurately reflect the responses.")
    };

    if relevance < 0.4 {
        feedback.push_str(" Consider reviewing the keywords as they don't appear frequently in the responses.");
    }
    if consistency < 0.3 {
        feedback.push_str(" The responses come from many different questions, which may reduce thematic focus.");
    } else if consistency > 0.7 {
        feedback.push_str(" The responses come from similar questions, which helps maintain thematic consistency.");
    }
    feedback
}

fn overall_feedback(score: f64, avg_coherence: f64, balance_ratio: f64, low_coherence: usize) -> String {
    let mut feedback = if score > 0.8 {
        "This is an excellent affinity mapping with strong thematic grouping and good balance between groups."
    } else if score > 0.6 {
        "This is a good affinity mapping with clear themes and reasonable balance between groups."
    } else if score > 0.4 {
        "This affinity mapping shows moderate effectiveness with some coherent groups but room for improvement."
    } else {
        "This affinity mapping needs significant improvement in group coherence and balance."
    }
    .to_string();

    if avg_coherence < 0.5 {
        feedback.push_str(" Consider reviewing group assignments to improve thematic coherence within groups.");
    }
    if balance_ratio < 0.3 {
        feedback.push_str(" The groups are quite unbalanced in size, which may indicate some themes are over or under-represented.");
    }
    if low_coherence > 0 {
        feedback.push_str(&format!(" Consider reviewing {low_coherence} groups with low coherence scores."));
    }
    feedback
}

// ── Export package ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResponse {
    pub participant_id: String,
    pub question: String,
    pub response: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationGroup {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub responses: Vec<EvaluationResponse>,
}

/// Clusters in the shape a downstream scorer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationPackage {
    pub evaluation_request: String,
    pub groups: Vec<EvaluationGroup>,
}

impl EvaluationPackage {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let groups = report
            .clusters
            .iter()
            .map(|c| EvaluationGroup {
                id: c.id,
                name: c.name.clone(),
                summary: c.summary.clone(),
                keywords: c.top_keywords.clone(),
                responses: c
                    .members
                    .iter()
                    .map(|m| EvaluationResponse {
                        participant_id: m.response.participant_id.clone(),
                        question: m.response.question.clone(),
                        response: m.response.text.clone(),
                        date: m.response.date,
                    })
                    .collect(),
            })
            .collect();
        Self {
            evaluation_request: EVALUATION_REQUEST.to_string(),
            groups,
        }
    }
}
