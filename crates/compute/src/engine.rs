use std::collections::BTreeSet;

use diarylens_core::{
    AnalysisOptions, DiaryLensError, EngineConfig, Mood, Response, TaskCategory,
};
use diarylens_rules::{load_lexicon, Lexicon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::classify;
use crate::pipeline::{AnalysisReport, Pipeline};
use crate::similarity::sparse_cosine;
use crate::text::{self, term_vector, top_keywords};

/// Entry point of the analysis engine.
///
/// Owns the lexicon every stage reads from. Besides the full [`run`](Self::run)
/// it exposes single-string helpers for ad hoc use.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    lexicon: Lexicon,
}

impl AnalysisEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Built-in lexicon, or the YAML file named by the config.
    pub fn from_config(config: &EngineConfig) -> Result<Self, DiaryLensError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => load_lexicon(path)?,
            None => Lexicon::builtin(),
        };
        info!(lexicon = %lexicon.name, "analysis engine ready");
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn normalize(&self, text: &str) -> String {
        text::normalize(text, &self.lexicon)
    }

    pub fn classify_mood(&self, text: &str) -> Mood {
        classify::classify_mood(text, &self.normalize(text), &self.lexicon)
    }

    pub fn classify_tasks(&self, text: &str) -> BTreeSet<TaskCategory> {
        classify::classify_tasks(&self.normalize(text), &self.lexicon)
    }

    pub fn detect_pain_points(&self, text: &str) -> Vec<String> {
        classify::detect_pain_points(&self.normalize(text), &self.lexicon)
    }

    /// Top `n` terms of `text` by frequency.
    pub fn extract_keywords(&self, text: &str, n: usize) -> Vec<String> {
        top_keywords(&self.terms(text), n)
    }

    /// Cosine similarity of the term-frequency vectors of two texts.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        sparse_cosine(&term_vector(&self.terms(a)), &term_vector(&self.terms(b)))
    }

    fn terms(&self, text: &str) -> Vec<String> {
        text::terms(&self.normalize(text), &self.lexicon, false)
    }

    /// Validate `options` and run the full pipeline.
    ///
    /// With `options.seed` set the result is reproducible; otherwise the first
    /// partitioning seed is drawn from the thread RNG.
    pub fn run(
        &self,
        responses: &[Response],
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport, DiaryLensError> {
        match options.seed {
            Some(seed) => self.run_with_rng(responses, options, &mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(responses, options, &mut rand::thread_rng()),
        }
    }

    /// Like [`run`](Self::run) with an explicit random source.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        responses: &[Response],
        options: &AnalysisOptions,
        rng: &mut R,
    ) -> Result<AnalysisReport, DiaryLensError> {
        options.validate()?;
        Ok(Pipeline::new(&self.lexicon, options).run(responses, rng))
    }
}
