use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiaryLensError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_parse<T: FromStr>(profile: &str, key: &str, default: T) -> T {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key).map(|v| v.to_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

// ── Clustering method ─────────────────────────────────────────

/// Which clustering strategy a run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusteringMethod {
    /// Seed-diversified partitioning scored by keyword-set Jaccard.
    Keyword,
    /// Similarity-threshold agglomeration over dense pseudo-embeddings.
    Semantic,
    /// Seed-diversified partitioning scored by average term-vector cosine.
    Lexical,
}

impl ClusteringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusteringMethod::Keyword => "keyword",
            ClusteringMethod::Semantic => "semantic",
            ClusteringMethod::Lexical => "lexical",
        }
    }
}

impl fmt::Display for ClusteringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusteringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(ClusteringMethod::Keyword),
            "semantic" => Ok(ClusteringMethod::Semantic),
            "lexical" => Ok(ClusteringMethod::Lexical),
            other => Err(format!(
                "unknown clustering method '{}' (expected keyword, semantic or lexical)",
                other
            )),
        }
    }
}

// ── Analysis options ──────────────────────────────────────────

/// Per-run options for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    #[serde(default = "default_method")]
    pub method: ClusteringMethod,
    /// Target group count for seed partitioning.
    #[serde(default = "default_num_groups")]
    pub num_groups: usize,
    /// Minimum similarity for a response to join a seeded group.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Maximum pairwise distance merged by agglomeration.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,
    /// Groups smaller than this are routed to the outlier bucket.
    #[serde(default = "default_min_cluster_size")]
    pub min_cluster_size: usize,
    #[serde(default = "default_true")]
    pub include_question_in_text: bool,
    /// Apply suffix-stripping lemmatization to content tokens.
    #[serde(default)]
    pub lemmatize: bool,
    #[serde(default = "default_keywords_per_response")]
    pub keywords_per_response: usize,
    /// Largest corpus agglomeration will accept before falling back.
    #[serde(default = "default_max_semantic_items")]
    pub max_semantic_items: usize,
    /// Fixes the random first seed of partitioning when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_method() -> ClusteringMethod { ClusteringMethod::Semantic }
fn default_num_groups() -> usize { 5 }
fn default_similarity_threshold() -> f64 { 0.3 }
fn default_distance_threshold() -> f64 { 0.5 }
fn default_min_cluster_size() -> usize { 2 }
fn default_true() -> bool { true }
fn default_keywords_per_response() -> usize { 10 }
fn default_max_semantic_items() -> usize { 5000 }

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            method: default_method(),
            num_groups: default_num_groups(),
            similarity_threshold: default_similarity_threshold(),
            distance_threshold: default_distance_threshold(),
            min_cluster_size: default_min_cluster_size(),
            include_question_in_text: default_true(),
            lemmatize: false,
            keywords_per_response: default_keywords_per_response(),
            max_semantic_items: default_max_semantic_items(),
            seed: None,
        }
    }
}

impl AnalysisOptions {
    /// Check every option against its documented range.
    pub fn validate(&self) -> Result<(), DiaryLensError> {
        if self.num_groups < 2 {
            return Err(DiaryLensError::InvalidOptions(format!(
                "num_groups must be >= 2, got {}",
                self.num_groups
            )));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(DiaryLensError::InvalidOptions(format!(
                "similarity_threshold must be in [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.distance_threshold) {
            return Err(DiaryLensError::InvalidOptions(format!(
                "distance_threshold must be in [0, 1], got {}",
                self.distance_threshold
            )));
        }
        if self.min_cluster_size < 1 {
            return Err(DiaryLensError::InvalidOptions(
                "min_cluster_size must be >= 1".to_string(),
            ));
        }
        if self.keywords_per_response < 1 {
            return Err(DiaryLensError::InvalidOptions(
                "keywords_per_response must be >= 1".to_string(),
            ));
        }
        if self.max_semantic_items < 1 {
            return Err(DiaryLensError::InvalidOptions(
                "max_semantic_items must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            method: profiled_env_parse(p, "DIARYLENS_METHOD", d.method),
            num_groups: profiled_env_parse(p, "DIARYLENS_NUM_GROUPS", d.num_groups),
            similarity_threshold: profiled_env_parse(
                p,
                "DIARYLENS_SIMILARITY_THRESHOLD",
                d.similarity_threshold,
            ),
            distance_threshold: profiled_env_parse(
                p,
                "DIARYLENS_DISTANCE_THRESHOLD",
                d.distance_threshold,
            ),
            min_cluster_size: profiled_env_parse(p, "DIARYLENS_MIN_CLUSTER_SIZE", d.min_cluster_size),
            include_question_in_text: profiled_env_bool(
                p,
                "DIARYLENS_INCLUDE_QUESTION",
                d.include_question_in_text,
            ),
            lemmatize: profiled_env_bool(p, "DIARYLENS_LEMMATIZE", d.lemmatize),
            keywords_per_response: d.keywords_per_response,
            max_semantic_items: profiled_env_parse(
                p,
                "DIARYLENS_MAX_SEMANTIC_ITEMS",
                d.max_semantic_items,
            ),
            seed: profiled_env_opt(p, "DIARYLENS_SEED").and_then(|v| v.parse().ok()),
        }
    }
}

// ── Engine config ─────────────────────────────────────────────

/// Host-level configuration: default run options plus where to find a
/// custom lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Active profile name (empty = default).
    pub profile: String,
    pub options: AnalysisOptions,
    /// YAML lexicon overriding the built-in tables.
    pub lexicon_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `DIARYLENS_PROFILE`. When set (e.g. `STUDY2`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("DIARYLENS_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            options: AnalysisOptions::from_env_profiled(p),
            lexicon_path: profiled_env_opt(p, "DIARYLENS_LEXICON").map(PathBuf::from),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        let o = &self.options;
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  clustering:  method={}, num_groups={}, similarity_threshold={}, distance_threshold={}",
            o.method,
            o.num_groups,
            o.similarity_threshold,
            o.distance_threshold
        );
        tracing::info!(
            "  grouping:    min_cluster_size={}, max_semantic_items={}, seed={}",
            o.min_cluster_size,
            o.max_semantic_items,
            o.seed.map(|s| s.to_string()).as_deref().unwrap_or("(random)")
        );
        tracing::info!(
            "  text:        include_question={}, lemmatize={}",
            o.include_question_in_text,
            o.lemmatize
        );
        tracing::info!(
            "  lexicon:     {}",
            self.lexicon_path
                .as_ref()
                .map(|p| p.display().to_string())
                .as_deref()
                .unwrap_or("(built-in)")
        );
    }
}
