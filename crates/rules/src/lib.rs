//! Lookup tables for the diary analysis engine.
//!
//! This crate provides:
//! - Built-in stopword, contraction, mood, task, pain and theme tables
//! - A YAML `Lexicon` document that can replace any of those tables
//! - Compilation of the document into an immutable [`Lexicon`] context object

pub mod defaults;
pub mod lexicon;
pub mod loader;

pub use lexicon::{Lexicon, LexiconDocument, LexiconMetadata, LexiconSpec, ThemeRule};
pub use loader::{load_lexicon, parse_lexicon, LexiconError};
