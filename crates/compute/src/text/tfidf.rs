use indexmap::IndexMap;

/// Per-document TF-IDF weights over one corpus.
///
/// `tf = count / |doc|`, `idf = ln(N / df)`. A term found in every document
/// has `idf == 0` and therefore contributes nothing to any score.
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    documents: Vec<IndexMap<String, f64>>,
    idf: IndexMap<String, f64>,
}

impl TfIdf {
    pub fn fit<S: AsRef<str>>(corpus: &[Vec<S>]) -> Self {
        let n = corpus.len() as f64;

        let mut doc_freq: IndexMap<&str, usize> = IndexMap::new();
        for doc in corpus {
            let mut seen = std::collections::HashSet::new();
            for term in doc {
                if seen.insert(term.as_ref()) {
                    *doc_freq.entry(term.as_ref()).or_insert(0) += 1;
                }
            }
        }

        let idf: IndexMap<String, f64> = doc_freq
            .iter()
            .map(|(term, df)| (term.to_string(), (n / *df as f64).ln()))
            .collect();

        let documents = corpus
            .iter()
            .map(|doc| {
                let mut counts: IndexMap<&str, usize> = IndexMap::new();
                for term in doc {
                    *counts.entry(term.as_ref()).or_insert(0) += 1;
                }
                let len = doc.len() as f64;
                counts
                    .into_iter()
                    .map(|(term, count)| {
                        let idf = idf.get(term).copied().unwrap_or(0.0);
                        (term.to_string(), count as f64 / len * idf)
                    })
                    .collect()
            })
            .collect();

        Self { documents, idf }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Scores for one document, in first-occurrence order.
    pub fn document(&self, index: usize) -> Option<&IndexMap<String, f64>> {
        self.documents.get(index)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Top `n` terms by summed score across `docs`. Equal scores keep the
    /// order in which the terms were first met.
    pub fn top_terms(&self, docs: &[usize], n: usize) -> Vec<String> {
        let mut totals: IndexMap<&str, f64> = IndexMap::new();
        for &doc in docs {
            let Some(scores) = self.documents.get(doc) else {
                continue;
            };
            for (term, score) in scores {
                *totals.entry(term.as_str()).or_insert(0.0) += score;
            }
        }

        let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(term, _)| term.to_string())
            .collect()
    }
}
