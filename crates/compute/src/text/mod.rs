//! Lexical stages: normalization, TF-IDF, keywords and vectorization.

pub mod keywords;
pub mod normalize;
pub mod tfidf;
pub mod vectorize;

pub use keywords::{keyphrases, merge_keywords, top_keywords};
pub use normalize::{content_tokens, lemma, normalize, terms};
pub use tfidf::TfIdf;
pub use vectorize::{dense_embedding, dense_embeddings, term_vector, TermVector, DENSE_DIM};
