//! diarylens: run the analysis engine over a JSON array of responses.
//!
//! Reads responses from `--input` (or stdin), resolves options from the
//! environment (`.env` included) with command-line flags taking precedence,
//! and prints the report as pretty JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use diarylens_compute::{evaluate, AnalysisEngine, AnalysisReport, QualityReport};
use diarylens_core::config::load_dotenv;
use diarylens_core::{ClusteringMethod, EngineConfig, Response};

// ── CLI ─────────────────────────────────────────────────────────────

/// Cluster and classify diary responses.
#[derive(Parser, Debug)]
#[command(name = "diarylens", version, about)]
struct Cli {
    /// JSON file holding an array of responses; stdin when omitted.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// YAML lexicon overriding the built-in tables.
    #[arg(long, env = "DIARYLENS_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Clustering method: keyword, semantic or lexical.
    #[arg(long)]
    method: Option<ClusteringMethod>,

    #[arg(long)]
    num_groups: Option<usize>,

    #[arg(long)]
    similarity_threshold: Option<f64>,

    #[arg(long)]
    distance_threshold: Option<f64>,

    #[arg(long)]
    min_cluster_size: Option<usize>,

    /// Cluster on the answer text only.
    #[arg(long)]
    exclude_question: bool,

    #[arg(long)]
    lemmatize: bool,

    /// Seed for reproducible partitioning.
    #[arg(long)]
    seed: Option<u64>,

    /// Append a cluster quality report.
    #[arg(long)]
    evaluate: bool,
}

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    evaluation: Option<QualityReport>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = EngineConfig::from_env();
    apply_overrides(&mut config, &cli);
    config.log_summary();

    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let responses: Vec<Response> =
        serde_json::from_str(&raw).context("input must be a JSON array of responses")?;
    info!(count = responses.len(), "responses loaded");

    let engine = AnalysisEngine::from_config(&config).context("failed to build engine")?;
    let report = engine
        .run(&responses, &config.options)
        .context("analysis failed")?;

    let evaluation = cli.evaluate.then(|| evaluate(&report));
    let output = Output { report, evaluation };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn apply_overrides(config: &mut EngineConfig, cli: &Cli) {
    if let Some(path) = &cli.lexicon {
        config.lexicon_path = Some(path.clone());
    }
    let o = &mut config.options;
    if let Some(method) = cli.method {
        o.method = method;
    }
    if let Some(v) = cli.num_groups {
        o.num_groups = v;
    }
    if let Some(v) = cli.similarity_threshold {
        o.similarity_threshold = v;
    }
    if let Some(v) = cli.distance_threshold {
        o.distance_threshold = v;
    }
    if let Some(v) = cli.min_cluster_size {
        o.min_cluster_size = v;
    }
    if cli.exclude_question {
        o.include_question_in_text = false;
    }
    if cli.lemmatize {
        o.lemmatize = true;
    }
    if cli.seed.is_some() {
        o.seed = cli.seed;
    }
}
